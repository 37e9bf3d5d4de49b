use color_eyre::eyre::{Result, eyre};
use signet::{
    CertificationService, Email, ExposeSecret, HashMapUserRepository, MyProfileResponse,
    SignetSettings, SystemClock, TracingEmailClient, UserCreate, UserService, UuidTokenGenerator,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Registers an account against the in-memory adapters, certifies it with the
/// mailed code and logs it in.
///
/// Usage: `signet <email> <nickname> <address>`
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let settings = SignetSettings::load()?;
    init_tracing(&settings.log.filter)?;

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(nickname), Some(address)) = (args.next(), args.next(), args.next())
    else {
        return Err(eyre!("usage: signet <email> <nickname> <address>"));
    };

    let sender = Email::try_from(settings.email_client.sender.as_str())?;
    let user_service = UserService::new(
        HashMapUserRepository::new(),
        CertificationService::new(
            TracingEmailClient::new(sender),
            settings.certification.base_url.clone(),
        ),
        SystemClock,
        UuidTokenGenerator,
    );

    let created = user_service
        .create(UserCreate {
            email: Email::try_from(email.as_str())?,
            nickname,
            address,
        })
        .await?;
    let id = created
        .id()
        .ok_or_else(|| eyre!("created user has no identifier"))?;
    tracing::info!(user_id = %id, status = %created.status(), "User created");

    let code = created
        .certification_code()
        .as_ref()
        .expose_secret()
        .clone();
    user_service.verify_email(id, &code).await?;
    user_service.login(id).await?;

    let profile: MyProfileResponse = user_service.get_my_profile(id).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}

pub fn init_tracing(default_filter: &str) -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
