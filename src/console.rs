//! Interactive console for the health club.
//!
//! Thin presentation layer over the services: menus prompt for
//! pre-parsed values, call one service operation, display the result,
//! and keep looping. Typed errors are printed, never propagated, so a
//! failed operation can't take the process down.

use crate::models::{ClassScheduleUpdate, MemberProfileUpdate, ScheduleClassRequest, UserRole};
use crate::AppState;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveTime;
use std::io::{self, Write};
use std::str::FromStr;
use uuid::Uuid;

/// Run the interactive role-selection loop until the user exits
pub async fn run(state: &AppState) {
    loop {
        println!("\nSelect role:");
        println!("\t0 - Exit");
        println!("\t1 - Admin");
        println!("\t2 - Trainer");
        println!("\t3 - Member");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("Exiting...");
                break;
            }
            "1" => admin_menu(state).await,
            "2" => trainer_menu(state).await,
            "3" => member_menu(state).await,
            _ => println!("Invalid input, try again."),
        }
    }
}

// ---------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------

async fn admin_menu(state: &AppState) {
    loop {
        println!("\n=== Admin Menu ===");
        println!("\t0 - Exit");
        println!("\n\t-- Room Management --");
        println!("\t1 - Create Room");
        println!("\t2 - List Rooms");
        println!("\n\t-- Class Management --");
        println!("\t3 - Schedule Fitness Class");
        println!("\t4 - Update Fitness Class");
        println!("\t5 - List Fitness Classes");
        println!("\n\t-- Billing & Payments --");
        println!("\t6 - Generate Bill for Member");
        println!("\t7 - Add Bill Line Item");
        println!("\t8 - Record Payment");
        println!("\t9 - View Bills");
        println!("\t10 - Delete Bill");
        println!("\n\t-- User/Staff Management --");
        println!("\t11 - View Members");
        println!("\t12 - View Trainers");
        println!("\t13 - View Trainer Availability");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        let outcome = match choice.as_str() {
            "0" => {
                println!("Exiting admin menu...");
                break;
            }
            "1" => admin_create_room(state).await,
            "2" => admin_list_rooms(state).await,
            "3" => admin_schedule_class(state).await,
            "4" => admin_update_class(state).await,
            "5" => admin_list_classes(state).await,
            "6" => admin_generate_bill(state).await,
            "7" => admin_add_line_item(state).await,
            "8" => admin_record_payment(state).await,
            "9" => admin_view_bills(state).await,
            "10" => admin_delete_bill(state).await,
            "11" => admin_view_members(state).await,
            "12" => admin_view_trainers(state).await,
            "13" => admin_view_availability(state).await,
            _ => {
                println!("Invalid input, try again.");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("\nError: {}", e);
        }
    }
}

async fn admin_create_room(state: &AppState) -> Result<()> {
    let Some(name) = read_input("Enter room name: ") else {
        return Ok(());
    };
    let Some(capacity_input) = read_input("Enter capacity (optional): ") else {
        return Ok(());
    };
    let capacity = parse_optional::<i64>(&capacity_input, "capacity")?;

    let room = state.scheduling.create_room(&name, capacity).await?;
    println!("\nRoom created. ID: {}, Name: {}", room.id, room.name);
    Ok(())
}

async fn admin_list_rooms(state: &AppState) -> Result<()> {
    let rooms = state.scheduling.list_rooms().await?;
    if rooms.is_empty() {
        println!("\nNo rooms found.");
        return Ok(());
    }

    println!("\nRooms:");
    for room in rooms {
        let capacity = room
            .capacity
            .map_or_else(|| "N/A".to_string(), |c| c.to_string());
        println!("  ID {}: {} (Capacity: {})", room.id, room.name, capacity);
    }
    Ok(())
}

async fn admin_schedule_class(state: &AppState) -> Result<()> {
    let Some(name) = read_input("Class name: ") else {
        return Ok(());
    };
    let Some(trainer_input) = read_input("Trainer ID: ") else {
        return Ok(());
    };
    let trainer_id = parse_uuid(&trainer_input, "trainer ID")?;

    let Some(day_of_week) = prompt_day("Day of week") else {
        return Ok(());
    };
    let Some(start_time) = prompt_time("Start time") else {
        return Ok(());
    };
    let Some(end_time) = prompt_time("End time") else {
        return Ok(());
    };

    let Some(room_input) = read_input("Room ID (optional): ") else {
        return Ok(());
    };
    let room_id = parse_optional_uuid(&room_input, "room ID")?;

    let Some(capacity_input) = read_input("Capacity (optional): ") else {
        return Ok(());
    };
    let capacity = parse_optional::<i64>(&capacity_input, "capacity")?;

    let session = state
        .scheduling
        .schedule_class(ScheduleClassRequest {
            name,
            trainer_id,
            day_of_week,
            start_time,
            end_time,
            room_id,
            capacity,
        })
        .await?;

    println!("\nClass scheduled. ID: {}", session.id);
    Ok(())
}

async fn admin_update_class(state: &AppState) -> Result<()> {
    let Some(class_input) = read_input("Class ID to update: ") else {
        return Ok(());
    };
    let class_id = parse_uuid(&class_input, "class ID")?;

    println!("Press Enter to keep existing values.");

    let Some(name) = read_input("New class name: ") else {
        return Ok(());
    };
    let Some(trainer_input) = read_input("New trainer ID: ") else {
        return Ok(());
    };
    let trainer_id = parse_optional_uuid(&trainer_input, "trainer ID")?;
    let Some(room_input) = read_input("New room ID: ") else {
        return Ok(());
    };
    let room_id = parse_optional_uuid(&room_input, "room ID")?;
    let Some(day_input) = read_input("New day (1-7) (optional): ") else {
        return Ok(());
    };
    let day_of_week = parse_optional::<i64>(&day_input, "day")?;
    let Some(start_input) = read_input("New start time (HH:MM) (optional): ") else {
        return Ok(());
    };
    let start_time = parse_optional_time(&start_input)?;
    let Some(end_input) = read_input("New end time (HH:MM) (optional): ") else {
        return Ok(());
    };
    let end_time = parse_optional_time(&end_input)?;
    let Some(capacity_input) = read_input("New capacity: ") else {
        return Ok(());
    };
    let capacity = parse_optional::<i64>(&capacity_input, "capacity")?;

    let update = ClassScheduleUpdate {
        name: if name.is_empty() { None } else { Some(name) },
        trainer_id,
        room_id,
        day_of_week,
        start_time,
        end_time,
        capacity,
    };

    let updated = state.scheduling.reschedule_class(class_id, update).await?;
    println!("\nClass updated. ID: {}", updated.id);
    Ok(())
}

async fn admin_list_classes(state: &AppState) -> Result<()> {
    let classes = state.scheduling.list_classes().await?;
    if classes.is_empty() {
        println!("\nNo classes scheduled.");
        return Ok(());
    }

    println!("\nScheduled Classes:");
    for class in classes {
        let room = class
            .room_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string());
        let capacity = class
            .capacity
            .map_or_else(|| "N/A".to_string(), |c| c.to_string());
        println!(
            "  ID {}: {} | Trainer {} | {} {} - {} | Room {} | Capacity {}",
            class.id,
            class.name,
            class.trainer_id,
            day_name(class.day_of_week),
            class.start_time.format("%H:%M"),
            class.end_time.format("%H:%M"),
            room,
            capacity
        );
    }
    Ok(())
}

async fn admin_generate_bill(state: &AppState) -> Result<()> {
    let Some(member_input) = read_input("Member ID: ") else {
        return Ok(());
    };
    let member_id = parse_uuid(&member_input, "member ID")?;

    let bill = state.billing.create_bill(member_id).await?;
    println!("\nBill created. ID: {} for member {}", bill.id, bill.member_id);
    Ok(())
}

async fn admin_add_line_item(state: &AppState) -> Result<()> {
    let Some(bill_input) = read_input("Bill ID: ") else {
        return Ok(());
    };
    let bill_id = parse_uuid(&bill_input, "bill ID")?;

    let Some(description) = read_input("Line item description: ") else {
        return Ok(());
    };
    let Some(amount_input) = read_input("Amount: ") else {
        return Ok(());
    };
    let amount: f64 = amount_input.parse().context("Invalid amount")?;

    state.billing.add_line_item(bill_id, &description, amount).await?;

    let statement = state.billing.bill_statement(bill_id).await?;
    println!(
        "\nLine item added. Total: {:.2}, Due: {:.2}",
        statement.totals.total_amount, statement.totals.amount_due
    );
    Ok(())
}

async fn admin_record_payment(state: &AppState) -> Result<()> {
    let Some(bill_input) = read_input("Bill ID: ") else {
        return Ok(());
    };
    let bill_id = parse_uuid(&bill_input, "bill ID")?;

    let statement = state.billing.bill_statement(bill_id).await?;
    println!("Amount due: {:.2}", statement.totals.amount_due);

    let Some(amount_input) = read_input("Payment amount: ") else {
        return Ok(());
    };
    let amount: f64 = amount_input.parse().context("Invalid amount")?;

    let payment = state.billing.record_payment(bill_id, amount).await?;
    let statement = state.billing.bill_statement(bill_id).await?;
    println!(
        "\nPayment recorded. Amount: {:.2}, New amount due: {:.2}",
        payment.amount, statement.totals.amount_due
    );
    Ok(())
}

async fn admin_view_bills(state: &AppState) -> Result<()> {
    let Some(member_input) = read_input("Member ID (press Enter for all): ") else {
        return Ok(());
    };
    let member_id = parse_optional_uuid(&member_input, "member ID")?;

    let statements = state.billing.list_bills(member_id).await?;
    if statements.is_empty() {
        println!("\nNo bills found.");
        return Ok(());
    }

    for statement in statements {
        println!(
            "\nBill {} | Member {} | Total {:.2} | Paid {:.2} | Due {:.2} | Status {}",
            statement.bill.id,
            statement.bill.member_id,
            statement.totals.total_amount,
            statement.totals.amount_paid,
            statement.totals.amount_due,
            statement.bill.status
        );
        if !statement.line_items.is_empty() {
            println!("  Line Items:");
            for item in &statement.line_items {
                println!("    - {}: {:.2}", item.description, item.amount);
            }
        }
        if !statement.payments.is_empty() {
            println!("  Payments:");
            for payment in &statement.payments {
                println!(
                    "    - {}: ${:.2}",
                    payment.created_at.format("%Y-%m-%d %H:%M"),
                    payment.amount
                );
            }
        }
    }
    Ok(())
}

async fn admin_delete_bill(state: &AppState) -> Result<()> {
    let Some(bill_input) = read_input("Bill ID to delete: ") else {
        return Ok(());
    };
    let bill_id = parse_uuid(&bill_input, "bill ID")?;

    state.billing.delete_bill(bill_id).await?;
    println!("\nBill {} deleted successfully.", bill_id);
    Ok(())
}

async fn admin_view_members(state: &AppState) -> Result<()> {
    let members = state.accounts.list_members().await?;
    if members.is_empty() {
        println!("\nNo members found.");
        return Ok(());
    }

    println!("\nMembers:");
    for member in members {
        let age = member
            .age
            .map_or_else(|| "N/A".to_string(), |a| a.to_string());
        let gender = member.gender.as_deref().unwrap_or("N/A").to_string();
        let weight = member
            .current_weight
            .map_or_else(|| "N/A".to_string(), |w| format!("{} kg", w));
        let goal = member
            .weight_goal
            .map_or_else(|| "N/A".to_string(), |w| format!("{} kg", w));
        println!(
            "  ID {}: {} | {} | Age: {} | Gender: {} | Weight: {} | Goal: {}",
            member.id,
            member.name.as_deref().unwrap_or("Unnamed"),
            member.email,
            age,
            gender,
            weight,
            goal
        );
    }
    Ok(())
}

async fn admin_view_trainers(state: &AppState) -> Result<()> {
    let trainers = state.accounts.list_trainers().await?;
    if trainers.is_empty() {
        println!("\nNo trainers found.");
        return Ok(());
    }

    println!("\nTrainers:");
    for trainer in trainers {
        println!(
            "  ID {}: {} | {}",
            trainer.id,
            trainer.name.as_deref().unwrap_or("Unnamed"),
            trainer.email
        );
    }
    Ok(())
}

async fn admin_view_availability(state: &AppState) -> Result<()> {
    let availabilities = state.availability.list_all().await?;
    if availabilities.is_empty() {
        println!("\nNo trainer availability found.");
        return Ok(());
    }

    println!("\nTrainer Availability:");
    for avail in availabilities {
        println!(
            "  Trainer: {} | {}: {} - {}",
            avail.trainer_name.as_deref().unwrap_or(&avail.trainer_email),
            day_name(avail.day_of_week),
            avail.start_time.format("%H:%M"),
            avail.end_time.format("%H:%M")
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Trainer
// ---------------------------------------------------------------------

async fn trainer_menu(state: &AppState) {
    loop {
        println!("\n=== Trainer Menu ===");
        println!("\t0 - Exit");
        println!("\t1 - Register (Create new trainer)");
        println!("\t2 - Login");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("Exiting trainer menu...");
                break;
            }
            "1" => {
                if let Err(e) = trainer_register(state).await {
                    println!("\nError: {}", e);
                }
            }
            "2" => {
                if let Err(e) = trainer_login(state).await {
                    println!("\nError: {}", e);
                }
            }
            _ => println!("Invalid input, try again."),
        }
    }
}

async fn trainer_register(state: &AppState) -> Result<()> {
    println!("\n=== Register Trainer ===");
    let Some(name) = read_input("Enter your name: ") else {
        return Ok(());
    };
    let Some(email) = read_input("Enter your email: ") else {
        return Ok(());
    };

    let trainer = state.accounts.register_trainer(&name, &email).await?;
    println!(
        "\nTrainer account created. ID: {}, Email: {}",
        trainer.id, trainer.email
    );
    Ok(())
}

async fn trainer_login(state: &AppState) -> Result<()> {
    println!("\n=== Trainer Login ===");
    let Some(email) = read_input("Enter your email: ") else {
        return Ok(());
    };

    match state.accounts.login(&email, UserRole::Trainer).await? {
        Some(trainer) => {
            println!("\nWelcome, {}!", trainer.display_name());
            let name = trainer.display_name().to_string();
            logged_in_trainer_menu(state, &name, trainer.id).await;
        }
        None => println!("\nInvalid email."),
    }
    Ok(())
}

async fn logged_in_trainer_menu(state: &AppState, trainer_name: &str, trainer_id: Uuid) {
    loop {
        println!("\n=== Trainer Dashboard - {} ===", trainer_name);
        println!("\t0 - Logout");
        println!("\n\t-- Schedule --");
        println!("\t1 - View Schedule");
        println!("\n\t-- Availability --");
        println!("\t2 - Set Availability");
        println!("\t3 - View Availability");
        println!("\n\t-- Members --");
        println!("\t4 - Lookup Member");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        let outcome = match choice.as_str() {
            "0" => {
                println!("\nLogged out. Goodbye, {}!", trainer_name);
                break;
            }
            "1" => trainer_view_schedule(state, trainer_id).await,
            "2" => trainer_set_availability(state, trainer_id).await,
            "3" => trainer_view_availability(state, trainer_id).await,
            "4" => trainer_lookup_member(state).await,
            _ => {
                println!("Invalid input, try again.");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("\nError: {}", e);
        }
    }
}

async fn trainer_view_schedule(state: &AppState, trainer_id: Uuid) -> Result<()> {
    println!("\n=== View Schedule ===");
    let sessions = state.scheduling.trainer_schedule(trainer_id).await?;
    if sessions.is_empty() {
        println!("No sessions found.");
        return Ok(());
    }

    for session in sessions {
        let room = session
            .room_id
            .map_or_else(|| "N/A".to_string(), |id| id.to_string());
        println!(
            "  Class {}: {} | {} - {} | Name: {} | Room: {}",
            session.id,
            day_name(session.day_of_week),
            session.start_time.format("%H:%M"),
            session.end_time.format("%H:%M"),
            session.name,
            room
        );
    }
    Ok(())
}

async fn trainer_set_availability(state: &AppState, trainer_id: Uuid) -> Result<()> {
    println!("\n=== Set Availability ===");
    loop {
        println!("\nDays of the week:");
        for day in 1..=7 {
            println!("  {}: {}", day, day_name(day));
        }
        println!("  0: Finish");

        let Some(day_input) = read_input("Enter day (0 to Finish): ") else {
            return Ok(());
        };
        let day = match day_input.parse::<i64>() {
            Ok(0) => return Ok(()),
            Ok(day) if (1..=7).contains(&day) => day,
            _ => {
                println!("Invalid day. Please enter 1-7.");
                continue;
            }
        };

        let Some(start_time) = prompt_time("Start time") else {
            return Ok(());
        };
        let Some(end_time) = prompt_time("End time") else {
            return Ok(());
        };

        match state
            .availability
            .create_window(trainer_id, day, start_time, end_time)
            .await
        {
            Ok(window) => println!(
                "Availability set for {}: {} - {} (Window ID: {})",
                day_name(window.day_of_week),
                window.start_time.format("%H:%M"),
                window.end_time.format("%H:%M"),
                window.id
            ),
            Err(e) => println!("Error: {}", e),
        }
    }
}

async fn trainer_view_availability(state: &AppState, trainer_id: Uuid) -> Result<()> {
    println!("\n=== My Availability ===");
    let windows = state.availability.list_windows(trainer_id).await?;
    if windows.is_empty() {
        println!("No availability set.");
        return Ok(());
    }

    for window in windows {
        println!(
            "  {}: {} - {}",
            day_name(window.day_of_week),
            window.start_time.format("%H:%M"),
            window.end_time.format("%H:%M")
        );
    }
    Ok(())
}

async fn trainer_lookup_member(state: &AppState) -> Result<()> {
    println!("\n=== Member Lookup ===");
    let Some(name) = read_input("Enter member name: ") else {
        return Ok(());
    };

    match state.accounts.lookup_member_by_name(&name).await? {
        Some(member) => {
            println!("\nMember: {}", member.display_name());
            println!("  Email: {}", member.email);
            println!(
                "  Age: {}",
                member.age.map_or_else(|| "N/A".to_string(), |a| a.to_string())
            );
            println!("  Gender: {}", member.gender.as_deref().unwrap_or("N/A"));
            println!(
                "  Weight Goal: {} kg",
                member
                    .weight_goal
                    .map_or_else(|| "N/A".to_string(), |w| w.to_string())
            );
        }
        None => println!("Member not found."),
    }
    Ok(())
}

// ---------------------------------------------------------------------
// Member
// ---------------------------------------------------------------------

async fn member_menu(state: &AppState) {
    loop {
        println!("\n=== Member Menu ===");
        println!("\t0 - Exit");
        println!("\t1 - Register (Create new member)");
        println!("\t2 - Login");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        match choice.as_str() {
            "0" => {
                println!("Exiting...");
                break;
            }
            "1" => {
                if let Err(e) = member_register(state).await {
                    println!("\nError: {}", e);
                }
            }
            "2" => {
                if let Err(e) = member_login(state).await {
                    println!("\nError: {}", e);
                }
            }
            _ => println!("Invalid input, try again."),
        }
    }
}

async fn member_register(state: &AppState) -> Result<()> {
    println!("\n=== Member Registration ===");
    let Some(name) = read_input("Enter your name: ") else {
        return Ok(());
    };
    let Some(email) = read_input("Enter your email: ") else {
        return Ok(());
    };
    let Some(age_input) = read_input("Enter your age (optional): ") else {
        return Ok(());
    };
    let age = parse_optional::<i64>(&age_input, "age")?;
    let Some(gender_input) = read_input("Enter your gender (optional): ") else {
        return Ok(());
    };
    let gender = if gender_input.is_empty() {
        None
    } else {
        Some(gender_input)
    };
    let Some(weight_input) = read_input("Enter your current weight in kg (optional): ") else {
        return Ok(());
    };
    let current_weight = parse_optional::<f64>(&weight_input, "weight")?;
    let Some(goal_input) = read_input("Enter your weight goal in kg (optional): ") else {
        return Ok(());
    };
    let weight_goal = parse_optional::<f64>(&goal_input, "weight goal")?;

    let member = state
        .accounts
        .register_member(&name, &email, age, gender, current_weight, weight_goal)
        .await?;
    println!(
        "\nMember registered successfully! ID: {}, Email: {}",
        member.id, member.email
    );
    Ok(())
}

async fn member_login(state: &AppState) -> Result<()> {
    println!("\n=== Member Login ===");
    let Some(email) = read_input("Enter your email: ") else {
        return Ok(());
    };

    match state.accounts.login(&email, UserRole::Member).await? {
        Some(member) => {
            println!("\nWelcome, {}!", member.display_name());
            let name = member.display_name().to_string();
            logged_in_member_menu(state, &name, member.id).await;
        }
        None => println!("\nInvalid email."),
    }
    Ok(())
}

async fn logged_in_member_menu(state: &AppState, member_name: &str, member_id: Uuid) {
    loop {
        println!("\n=== Member Dashboard - {} ===", member_name);
        println!("\t0 - Logout");
        println!("\t1 - View Dashboard");
        println!("\t2 - Update Profile");
        println!("\t3 - Register for Group Class");

        let Some(choice) = read_input("Enter choice: ") else {
            break;
        };

        let outcome = match choice.as_str() {
            "0" => {
                println!("\nLogged out. Goodbye, {}!", member_name);
                break;
            }
            "1" => member_view_dashboard(state, member_id).await,
            "2" => member_update_profile(state, member_id).await,
            "3" => member_register_for_class(state, member_id).await,
            _ => {
                println!("Invalid input, try again.");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("\nError: {}", e);
        }
    }
}

async fn member_view_dashboard(state: &AppState, member_id: Uuid) -> Result<()> {
    println!("\n=== Dashboard ===");
    let dashboard = state.accounts.member_dashboard(member_id).await?;
    let member = &dashboard.member;

    println!("\nProfile:");
    println!("  Name: {}", member.name.as_deref().unwrap_or("N/A"));
    println!("  Email: {}", member.email);
    println!(
        "  Age: {}",
        member.age.map_or_else(|| "N/A".to_string(), |a| a.to_string())
    );
    println!("  Gender: {}", member.gender.as_deref().unwrap_or("N/A"));
    println!(
        "  Current Weight: {}",
        member
            .current_weight
            .map_or_else(|| "N/A".to_string(), |w| format!("{} kg", w))
    );
    println!(
        "  Weight Goal: {}",
        member
            .weight_goal
            .map_or_else(|| "N/A".to_string(), |w| format!("{} kg", w))
    );

    println!("\nEnrolled Classes ({}):", dashboard.enrolled_classes.len());
    if dashboard.enrolled_classes.is_empty() {
        println!("  No enrolled classes");
    } else {
        for session in &dashboard.enrolled_classes {
            println!("  Class ID: {} | {}", session.id, session.name);
            println!(
                "    {} | {} - {}",
                day_name(session.day_of_week),
                session.start_time.format("%H:%M"),
                session.end_time.format("%H:%M")
            );
        }
    }
    Ok(())
}

async fn member_update_profile(state: &AppState, member_id: Uuid) -> Result<()> {
    println!("\n=== Update Profile ===");
    println!("(Press Enter to skip updating a field)");

    let Some(name_input) = read_input("Name: ") else {
        return Ok(());
    };
    let Some(age_input) = read_input("Age: ") else {
        return Ok(());
    };
    let age = parse_optional::<i64>(&age_input, "age")?;
    let Some(gender_input) = read_input("Gender: ") else {
        return Ok(());
    };
    let Some(weight_input) = read_input("Current Weight in kg: ") else {
        return Ok(());
    };
    let current_weight = parse_optional::<f64>(&weight_input, "weight")?;
    let Some(goal_input) = read_input("Weight Goal in kg: ") else {
        return Ok(());
    };
    let weight_goal = parse_optional::<f64>(&goal_input, "weight goal")?;

    let update = MemberProfileUpdate {
        name: if name_input.is_empty() {
            None
        } else {
            Some(name_input)
        },
        age,
        gender: if gender_input.is_empty() {
            None
        } else {
            Some(gender_input)
        },
        current_weight,
        weight_goal,
    };

    state.accounts.update_member_profile(member_id, update).await?;
    println!("\nProfile updated successfully!");
    Ok(())
}

async fn member_register_for_class(state: &AppState, member_id: Uuid) -> Result<()> {
    println!("\n=== Register for Group Class ===");

    let classes = state.scheduling.list_classes().await?;
    if classes.is_empty() {
        println!("No available group classes found.");
        return Ok(());
    }

    println!("\nAvailable Group Classes:");
    for class in &classes {
        println!("  Class ID: {} | {}", class.id, class.name);
        println!(
            "    {} | {} - {}",
            day_name(class.day_of_week),
            class.start_time.format("%H:%M"),
            class.end_time.format("%H:%M")
        );
    }

    let Some(class_input) = read_input("\nEnter class ID to register: ") else {
        return Ok(());
    };
    let class_id = parse_uuid(&class_input, "class ID")?;

    let enrollment = state.enrollment.register_for_class(member_id, class_id).await?;
    println!(
        "\nRegistered for group class successfully! Enrollment date: {}",
        enrollment.registration_date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

// ---------------------------------------------------------------------
// Prompt helpers
// ---------------------------------------------------------------------

/// Print a prompt and read one trimmed line; None on EOF
fn read_input(label: &str) -> Option<String> {
    print!("{}", label);
    io::stdout().flush().ok();

    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim().to_string()),
        Err(_) => None,
    }
}

/// Prompt for a weekday until valid; None on EOF
fn prompt_day(label: &str) -> Option<i64> {
    println!("\nDays of the week:");
    for day in 1..=7 {
        println!("  {}: {}", day, day_name(day));
    }

    loop {
        let raw = read_input(&format!("{} (1-7): ", label))?;
        match raw.parse::<i64>() {
            Ok(day) if (1..=7).contains(&day) => return Some(day),
            _ => println!("Day must be between 1 and 7."),
        }
    }
}

/// Prompt for an HH:MM time until valid; None on EOF
fn prompt_time(label: &str) -> Option<NaiveTime> {
    loop {
        let raw = read_input(&format!("{} (HH:MM): ", label))?;
        match NaiveTime::parse_from_str(&raw, "%H:%M") {
            Ok(time) => return Some(time),
            Err(_) => println!("Invalid time format. Use HH:MM."),
        }
    }
}

fn parse_uuid(raw: &str, what: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| anyhow!("Invalid {}", what))
}

fn parse_optional_uuid(raw: &str, what: &str) -> Result<Option<Uuid>> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_uuid(raw, what).map(Some)
}

fn parse_optional<T: FromStr>(raw: &str, what: &str) -> Result<Option<T>> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| anyhow!("Invalid {}", what))
}

fn parse_optional_time(raw: &str) -> Result<Option<NaiveTime>> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(Some)
        .map_err(|_| anyhow!("Invalid time format. Use HH:MM."))
}

fn day_name(day: i64) -> &'static str {
    match day {
        1 => "Monday",
        2 => "Tuesday",
        3 => "Wednesday",
        4 => "Thursday",
        5 => "Friday",
        6 => "Saturday",
        7 => "Sunday",
        _ => "Unknown",
    }
}
