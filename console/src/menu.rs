use application::service::{AuthenticateService, RegisterAccountService};
use application::transfer::{AuthenticateDto, RegisterAccountDto};
use error_stack::Report;
use kernel::prelude::entity::UserRole;
use kernel::KernelError;

use crate::handler::AppModule;
use crate::prompt;

mod admin;
mod customer;

pub(crate) fn report_error(report: &Report<KernelError>) {
    tracing::debug!(?report, "operation failed");
    println!("{}", report.current_context());
}

pub async fn run(app: &AppModule) -> error_stack::Result<(), KernelError> {
    loop {
        println!("\n1. Register\n2. Login\n3. Exit");
        let choice = prompt::read_line("Enter choice: ")?;
        match choice.as_str() {
            "1" => {
                if let Err(report) = register(app).await {
                    report_error(&report);
                }
            }
            "2" => login(app).await?,
            "3" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}

async fn register(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Registering a new user...");
    let username = prompt::read_line("Enter username: ")?;
    let email = prompt::read_line("Enter email: ")?;
    let password = prompt::read_line("Enter password: ")?;

    app.database()
        .register_account(RegisterAccountDto {
            username,
            email,
            password,
            role: UserRole::Customer,
        })
        .await?;
    println!("User registered successfully.");
    Ok(())
}

async fn login(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Logging in...");
    let email = prompt::read_line("Enter email: ")?;
    let password = prompt::read_line("Enter password: ")?;

    let account = match app
        .database()
        .authenticate(AuthenticateDto { email, password })
        .await
    {
        Ok(account) => account,
        Err(report) => {
            report_error(&report);
            return Ok(());
        }
    };
    println!("Welcome, {}!", account.username);

    match account.role {
        UserRole::Admin => admin::run(app).await,
        UserRole::Customer => customer::run(app, account.id).await,
    }
}
