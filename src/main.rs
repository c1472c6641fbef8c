use registration_form::{Field, SubmitOutcome, http_controller, load_config};
use strum::IntoEnumIterator;
use tracing_subscriber::EnvFilter;

/// Submits one registration from `key=value` arguments, e.g.
/// `registration-form firstName=Jane lastName=Doe cin=AB123 ...`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|arg| arg == "--help") {
        let keys: Vec<String> = Field::iter().map(|field| field.to_string()).collect();
        println!("usage: registration-form <key=value>...");
        println!("keys: {}", keys.join(", "));
        return Ok(());
    }

    let config = load_config()?;
    tracing::debug!("Loaded configuration:\n{}", config);

    let mut controller = http_controller(&config)?;
    tracing::info!(
        endpoint = %controller.api().endpoint(),
        heading = controller.view().heading(),
        "Registration form ready"
    );

    for arg in &args {
        let (key, value) = parse_assignment(arg)?;
        controller.update_field_by_key(key, value)?;
    }

    match controller.submit().await? {
        SubmitOutcome::Created => {
            if let Some(message) = controller.view().success_message() {
                println!("{message}");
            }
            if let Some(path) = controller.navigator().current() {
                println!("-> {path}");
            }
        }
        SubmitOutcome::Failed { reason } => {
            eprintln!("{reason}");
            std::process::exit(1);
        }
        SubmitOutcome::Rejected(_) => {
            let view = controller.view();
            for field in Field::iter() {
                if let Some(message) = view.field_error(field) {
                    eprintln!("{field}: {message}");
                }
            }
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Splits `key=value` at the first `=`; the value may itself contain `=`.
fn parse_assignment(arg: &str) -> Result<(&str, &str), String> {
    arg.split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{arg}'"))
}
