use application::service::{BookVehicleService, GetVehicleService};
use application::transfer::BookVehicleDto;
use kernel::KernelError;

use crate::handler::AppModule;
use crate::menu::report_error;
use crate::prompt;

pub(super) async fn run(app: &AppModule, user_id: i64) -> error_stack::Result<(), KernelError> {
    loop {
        println!("\n1. View Available Vehicles\n2. Book Vehicle\n3. Logout");
        let choice = prompt::read_line("Enter choice: ")?;
        let result = match choice.as_str() {
            "1" => view_available(app).await,
            "2" => book_vehicle(app, user_id).await,
            "3" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        if let Err(report) = result {
            report_error(&report);
        }
    }
    Ok(())
}

async fn view_available(app: &AppModule) -> error_stack::Result<(), KernelError> {
    let vehicles = app.database().get_available_vehicles().await?;
    if vehicles.is_empty() {
        println!("No available vehicles.");
        return Ok(());
    }
    for vehicle in &vehicles {
        println!(
            "ID: {}, Make: {}, Model: {}, Year: {}, Mileage: {}, Daily Rate: ${:.2}, Min Rent Period: {}, Max Rent Period: {}",
            vehicle.id,
            vehicle.make,
            vehicle.model,
            vehicle.year,
            vehicle.mileage,
            vehicle.daily_rate,
            vehicle.min_rent_period,
            vehicle.max_rent_period,
        );
    }
    Ok(())
}

async fn book_vehicle(app: &AppModule, user_id: i64) -> error_stack::Result<(), KernelError> {
    view_available(app).await?;
    let vehicle_id = prompt::read_parsed::<i64>("Enter the ID of the vehicle to book: ")?;
    let start_date = prompt::read_line("Enter rental start date (YYYY-MM-DD): ")?;
    let end_date = prompt::read_line("Enter rental end date (YYYY-MM-DD): ")?;

    let booked = app
        .database()
        .book_vehicle(BookVehicleDto {
            vehicle_id,
            user_id,
            start_date,
            end_date,
        })
        .await?;
    println!("Vehicle booked successfully! Rental Fee: ${:.2}", booked.fee);
    Ok(())
}
