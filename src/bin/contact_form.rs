use clap::Parser;
use fingard_checkout::adapters::contact_api::ContactApi;
use fingard_checkout::domain::model::ContactFields;
use fingard_checkout::utils::error::ContactFormError;
use fingard_checkout::utils::{logger, validation::Validate};
use fingard_checkout::{CheckoutConfig, ContactForm};

#[derive(Parser)]
#[command(name = "contact-form")]
#[command(about = "Submit a contact enquiry to the configured endpoint")]
struct Args {
    /// Full name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Phone number
    #[arg(long)]
    phone: String,

    /// Enquiry message (at least 10 characters)
    #[arg(long)]
    message: String,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting contact-form CLI");

    // 載入並驗證配置
    let config = match &args.config {
        Some(path) => match CheckoutConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => CheckoutConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let form = ContactForm::new(ContactApi::from_config(&config.contact)?);
    let fields = ContactFields {
        name: args.name,
        email: args.email,
        phone: args.phone,
        message: args.message,
    };

    match form.submit(&fields).await {
        Ok(ack) => {
            tracing::info!("✅ Contact form submitted successfully");
            println!("✅ {}", ack.message);
        }
        Err(ContactFormError::Invalid(errors)) => {
            // 每個欄位一條訊息，與頁面上的行內錯誤對應
            for error in &errors {
                eprintln!("❌ {}: {}", error.field, error.reason);
            }
            std::process::exit(1);
        }
        Err(ContactFormError::Submission(e)) => {
            tracing::error!("❌ Contact submission failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    }

    Ok(())
}
