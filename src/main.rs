use clap::Parser;
use fingard_checkout::adapters::razorpay::RazorpayGateway;
use fingard_checkout::core::checkout::CouponOutcome;
use fingard_checkout::domain::model::PaymentFields;
use fingard_checkout::utils::{logger, validation::Validate};
use fingard_checkout::{CheckoutConfig, CheckoutFlow, CliArgs};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting fingard-checkout CLI");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    // 驗證參數
    if let Err(e) = args.validate() {
        tracing::error!("❌ Argument validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 載入並驗證配置
    let config = match &args.config {
        Some(path) => CheckoutConfig::from_file(path)?,
        None => CheckoutConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let gateway = RazorpayGateway::from_config(&config.payment);
    let mut flow = CheckoutFlow::new(gateway, config);

    if let Some(code) = &args.coupon {
        match flow.apply_coupon(code) {
            CouponOutcome::Applied(code) => println!("✅ Coupon \"{}\" applied!", code),
            CouponOutcome::Invalid => println!("❌ Invalid coupon code"),
        }
    }

    // 決定金額：目錄價格或自訂金額
    let raw_amount = match args.amount {
        Some(amount) => amount.to_string(),
        None => flow.catalog().price_of(&args.service)?.to_string(),
    };

    let summary = flow.summary(&raw_amount);
    println!("Service amount: {}", summary.service_amount);
    if summary.discount_visible {
        println!("Discount:       -{}", summary.discount_amount);
    }
    println!("Total payable:  {}", summary.total_amount);

    if args.submit {
        let fields = PaymentFields {
            client_name: args.name.clone().unwrap_or_default(),
            client_email: args.email.clone().unwrap_or_default(),
            client_phone: args.phone.clone().unwrap_or_default(),
            service_type: args.service.clone(),
            amount: raw_amount,
            description: args.description.clone(),
            coupon_code: args.coupon.clone().unwrap_or_default(),
        };

        match flow.submit_payment(&fields).await {
            Ok(receipt) => {
                tracing::info!("✅ Payment order created");
                println!("✅ Payment successful! Payment ID: {}", receipt.payment_id);
            }
            Err(e) => {
                tracing::error!("❌ Payment submission failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
