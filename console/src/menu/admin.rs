use application::service::{
    CreateVehicleService, DecideReservationService, DeleteVehicleService, GetReservationService,
    GetVehicleService, UpdateVehicleService,
};
use application::transfer::{
    CreateVehicleDto, DecideReservationDto, DeleteVehicleDto, GetVehicleDto, UpdateVehicleDto,
    VehicleDto,
};
use kernel::KernelError;

use crate::handler::AppModule;
use crate::menu::report_error;
use crate::prompt;

pub(super) async fn run(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Admin logged in.");
    loop {
        println!(
            "\n1. Add Vehicle\n2. View Vehicles\n3. Update Vehicle\n4. Delete Vehicle\n5. Manage Reservations\n6. Logout"
        );
        let choice = prompt::read_line("Enter choice: ")?;
        let result = match choice.as_str() {
            "1" => add_vehicle(app).await,
            "2" => view_vehicles(app).await,
            "3" => update_vehicle(app).await,
            "4" => delete_vehicle(app).await,
            "5" => manage_reservations(app).await,
            "6" => break,
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

fn print_vehicle(vehicle: &VehicleDto) {
    println!(
        "ID: {}, Make: {}, Model: {}, Year: {}, Mileage: {}, Daily Rate: ${:.2}, Min Rent Period: {}, Max Rent Period: {}, Available: {}",
        vehicle.id,
        vehicle.make,
        vehicle.model,
        vehicle.year,
        vehicle.mileage,
        vehicle.daily_rate,
        vehicle.min_rent_period,
        vehicle.max_rent_period,
        if vehicle.available_now { "yes" } else { "no" },
    );
}

async fn add_vehicle(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Adding a new vehicle...");
    let make = prompt::read_line("Enter vehicle make: ")?;
    let model = prompt::read_line("Enter vehicle model: ")?;
    let year = prompt::read_parsed::<i32>("Enter vehicle year: ")?;
    let mileage = prompt::read_parsed::<i32>("Enter vehicle mileage: ")?;
    let daily_rate = prompt::read_non_negative("Enter daily rate: ")?;
    let min_rent_period = prompt::read_positive("Enter minimum rent period (in days): ")?;
    let max_rent_period = prompt::read_positive("Enter maximum rent period (in days): ")?;

    app.database()
        .create_vehicle(CreateVehicleDto {
            make,
            model,
            year,
            mileage,
            daily_rate,
            min_rent_period,
            max_rent_period,
        })
        .await?;
    println!("Vehicle added successfully.");
    Ok(())
}

async fn view_vehicles(app: &AppModule) -> error_stack::Result<(), KernelError> {
    let vehicles = app.database().get_vehicles().await?;
    if vehicles.is_empty() {
        println!("No vehicles in the catalog.");
        return Ok(());
    }
    for vehicle in &vehicles {
        print_vehicle(vehicle);
    }
    Ok(())
}

async fn update_vehicle(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Updating a vehicle...");
    let id = prompt::read_parsed::<i64>("Enter the ID of the vehicle to update: ")?;

    let current = app.database().get_vehicle(GetVehicleDto { id }).await?;
    println!("Current details:");
    print_vehicle(&current);
    println!("Leave a field blank to keep its current value.");

    let dto = UpdateVehicleDto {
        id,
        make: prompt::read_optional("Enter new make: ")?,
        model: prompt::read_optional("Enter new model: ")?,
        year: prompt::read_optional_parsed::<i32>("Enter new year: ")?,
        mileage: prompt::read_optional_parsed::<i32>("Enter new mileage: ")?,
        daily_rate: prompt::read_optional_non_negative("Enter new daily rate: ")?,
        min_rent_period: prompt::read_optional_positive("Enter new minimum rent period: ")?,
        max_rent_period: prompt::read_optional_positive("Enter new maximum rent period: ")?,
        available_now: prompt::read_optional_yes_no("Is the vehicle available now? (yes/no): ")?,
    };
    app.database().update_vehicle(dto).await?;
    println!("Vehicle updated successfully.");
    Ok(())
}

async fn delete_vehicle(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Deleting a vehicle...");
    let id = prompt::read_parsed::<i64>("Enter the ID of the vehicle to delete: ")?;
    app.database().delete_vehicle(DeleteVehicleDto { id }).await?;
    println!("Vehicle with ID {id} has been deleted successfully.");
    Ok(())
}

async fn manage_reservations(app: &AppModule) -> error_stack::Result<(), KernelError> {
    println!("Managing reservations...");
    let reservations = app.database().get_reservations().await?;
    if reservations.is_empty() {
        println!("No reservations.");
        return Ok(());
    }
    for reservation in &reservations {
        println!(
            "Reservation ID: {}, User ID: {}, Vehicle ID: {}, Start Date: {}, End Date: {}, Status: {}",
            reservation.id,
            reservation.user_id,
            reservation.vehicle_id,
            reservation.start_date,
            reservation.end_date,
            reservation.status,
        );
    }

    loop {
        println!("\n1. Decide Reservation\n2. Back");
        let choice = prompt::read_line("Enter choice: ")?;
        match choice.as_str() {
            "1" => {
                let reservation_id =
                    prompt::read_parsed::<i64>("Enter the Reservation ID to approve/reject: ")?;
                let decision =
                    prompt::read_line("Enter 'approve' to approve or 'reject' to reject: ")?;
                match app
                    .database()
                    .decide_reservation(DecideReservationDto {
                        reservation_id,
                        decision,
                    })
                    .await
                {
                    Ok(decided) => println!("Reservation {}.", decided.status),
                    Err(report) => report_error(&report),
                }
            }
            "2" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
    Ok(())
}
