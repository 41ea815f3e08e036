//! Demo portal run
//!
//! Seeds the record store and walks the claim workflow end to end: the
//! coordinator reviews the completed visits, the admin pays the approved
//! claim and pulls the payment artifacts.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use core_kernel::PatientId;
use domain_patient::PatientDirectory;
use interface_portal::{OperatorRole, PortalConfig, Session};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = PortalConfig::from_env().unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    tracing::info!("starting reimbursement portal demo");

    // Coordinator: review the completed visits
    let mut session = Session::new(OperatorRole::Coordinator, PatientDirectory::seeded());

    let summary = session.summary()?;
    println!("Eligible patients:   {}", summary.eligible_count);
    println!("Total kilometres:    {} km", summary.eligible_distance_km);
    println!("Total reimbursement: {}", summary.eligible_total);
    println!();

    let michael: PatientId = "PT004".parse()?;
    session.approve_claim(michael)?;
    println!("Approved claim for {michael}");

    let james: PatientId = "PT002".parse()?;
    if let Err(err) = session.approve_claim(james) {
        println!("Could not approve {james}: {err}");
    }
    println!();

    // Admin: pay out and pull the artifacts
    let mut session = Session::new(OperatorRole::Admin, session.into_directory());

    session.mark_paid(michael)?;
    println!("Payment processed for {michael}");
    println!();

    let lisa: PatientId = "PT005".parse()?;
    println!("{}", session.invoice_for(lisa)?.render_text());

    println!("Payment export:");
    print!("{}", session.payment_export(&config.export_delimiter)?);
    println!();

    let emma: PatientId = "PT003".parse()?;
    println!("Route for {emma}: {}", session.directions_for(emma, &config.maps_base_url)?);

    Ok(())
}
