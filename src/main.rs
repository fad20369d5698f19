use clap::Parser;
use colored::*;
use rgen_image::{
    logger::{self, LogLevel, LoggerConfig},
    GenerationController, GenerationView, ImageApiConfig, ImageClient, ImageModel, ImageSize,
    RenderedImage, UiState,
};
use std::fs;
use std::io::{self, BufRead, Write};

const IDLE_LABEL: &str = "Generate Image";
const LOADING_LABEL: &str = "Generating...";

/// Generate an image from a text prompt.
#[derive(Debug, clap::Parser)]
#[command(name = "rgen-image", version)]
struct Cli {
    /// Prompt to submit. Without it, one prompt is read per line of stdin.
    #[arg(short, long)]
    prompt: Option<String>,

    #[arg(short, long, value_enum, default_value_t = ImageModel::default())]
    model: ImageModel,

    #[arg(short, long, value_enum, default_value_t = ImageSize::default())]
    size: ImageSize,

    /// Download the generated image under its suggested filename
    #[arg(long)]
    save: bool,

    /// Overrides SREE_API_ENDPOINT
    #[arg(long)]
    endpoint: Option<String>,

    /// Overrides SREE_API_TIMEOUT_SECS
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print the offered models and sizes and exit
    #[arg(long)]
    list_models: bool,
}

/// Terminal rendition of the form: status and errors on stderr, results on stdout.
struct TerminalView {
    prompt: String,
    model: ImageModel,
    size: ImageSize,
    loading: bool,
    image: Option<RenderedImage>,
}

impl TerminalView {
    fn new(model: ImageModel, size: ImageSize) -> Self {
        Self {
            prompt: String::new(),
            model,
            size,
            loading: false,
            image: None,
        }
    }

    fn trigger_label(&self) -> &'static str {
        if self.loading {
            LOADING_LABEL
        } else {
            IDLE_LABEL
        }
    }
}

fn logger_config(cli: &Cli) -> LoggerConfig {
    if cli.json_logs {
        LoggerConfig::production()
    } else if cli.verbose {
        LoggerConfig::development()
    } else {
        // Failures already reach the user through the view.
        LoggerConfig::default().with_level(LogLevel::Error)
    }
}

fn startup_notice(config: &ImageApiConfig) -> Option<&'static str> {
    if config.has_credential() {
        None
    } else {
        Some("API Key not configured.")
    }
}

/// Zero only when the last cycle produced an image.
fn exit_code(state: &UiState) -> i32 {
    match state {
        UiState::Succeeded(_) => 0,
        _ => 1,
    }
}

impl GenerationView for TerminalView {
    fn prompt(&self) -> String {
        self.prompt.clone()
    }

    fn model(&self) -> ImageModel {
        self.model
    }

    fn size(&self) -> ImageSize {
        self.size
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        let icon = if loading { "⏳" } else { "▶" };
        eprintln!("{} {}", icon, self.trigger_label().bright_black());
    }

    fn set_error(&mut self, message: Option<&str>) {
        if let Some(message) = message {
            eprintln!("{}", message.red().bold());
        }
    }

    fn set_result(&mut self, image: Option<&RenderedImage>) {
        self.image = image.cloned();
        if let Some(image) = image {
            println!("{}", image.url);
            eprintln!("💾 Download as: {}", image.download_filename.bright_cyan());
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let cli = Cli::parse();

    logger::init_with_config(logger_config(&cli))?;

    if dotenv_loaded {
        log::debug!("✅ .env file loaded");
    } else {
        log::debug!("No .env file found, using process environment");
    }

    if cli.list_models {
        println!("Models:");
        for model in ImageModel::all() {
            println!("  {} - {}", model.as_str(), model.display_name());
        }
        println!("Sizes:");
        for size in ImageSize::all() {
            println!("  {}", size.as_str());
        }
        return Ok(());
    }

    let mut config = ImageApiConfig::from_env();
    if let Some(endpoint) = cli.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    log::debug!("Configuration loaded: {:?}", config);

    let mut view = TerminalView::new(cli.model, cli.size);
    match startup_notice(&config) {
        Some(notice) => {
            log::warn!("API key is not configured. Set SREE_API_KEY in the environment or a .env file.");
            view.set_error(Some(notice));
        }
        None => log::info!("🚀 Image generator initialized, API key loaded"),
    }

    let client = ImageClient::new(&config)?;
    let mut controller =
        GenerationController::new(client.clone(), view, config.api_key.clone());

    let code = match cli.prompt {
        Some(prompt) => run_once(&mut controller, &client, prompt, cli.save).await,
        None => run_interactive(&mut controller, &client, cli.save).await?,
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn run_once(
    controller: &mut GenerationController<ImageClient, TerminalView>,
    client: &ImageClient,
    prompt: String,
    save: bool,
) -> i32 {
    controller.view_mut().prompt = prompt;
    let code = exit_code(controller.submit().await);

    if code == 0 && save {
        if let Some(image) = controller.view().image.clone() {
            save_image(client, &image).await;
        }
    }
    code
}

/// Every stdin line is a new submission, like pressing the button again.
async fn run_interactive(
    controller: &mut GenerationController<ImageClient, TerminalView>,
    client: &ImageClient,
    save: bool,
) -> io::Result<i32> {
    let stdin = io::stdin();
    let mut last = exit_code(controller.state());

    loop {
        eprint!("{} ", "prompt>".bold());
        io::stderr().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        last = run_once(controller, client, line, save).await;
    }

    Ok(last)
}

async fn save_image(client: &ImageClient, image: &RenderedImage) {
    match client.fetch_image(&image.url).await {
        Ok(bytes) => match fs::write(&image.download_filename, &bytes) {
            Ok(_) => log::info!("💾 Image saved to: {}", image.download_filename),
            Err(e) => log::error!("❌ Failed to save image: {}", e),
        },
        Err(e) => log::error!("❌ Failed to download image: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgen_image::{GenerationError, GenerationResult};

    #[test]
    fn trigger_label_follows_loading() {
        let mut view = TerminalView::new(ImageModel::default(), ImageSize::default());
        assert_eq!(view.trigger_label(), "Generate Image");

        view.set_loading(true);
        assert_eq!(view.trigger_label(), "Generating...");

        view.set_loading(false);
        assert_eq!(view.trigger_label(), "Generate Image");
    }

    #[test]
    fn only_a_successful_cycle_exits_cleanly() {
        let succeeded = UiState::Succeeded(GenerationResult {
            image_url: "https://x/y.png".into(),
        });
        assert_eq!(exit_code(&succeeded), 0);
        assert_eq!(exit_code(&UiState::Idle), 1);
        assert_eq!(exit_code(&UiState::Loading), 1);
        assert_eq!(
            exit_code(&UiState::Failed(GenerationError::MalformedResponse)),
            1
        );
    }

    #[test]
    fn missing_key_is_announced_at_startup() {
        assert_eq!(
            startup_notice(&ImageApiConfig::new()),
            Some("API Key not configured.")
        );
        assert_eq!(
            startup_notice(&ImageApiConfig::new().with_api_key("sk-test")),
            None
        );
    }

    #[test]
    fn default_logging_leaves_failures_to_the_view() {
        let cli = Cli::parse_from(["rgen-image", "--prompt", "a cat"]);
        assert_eq!(logger_config(&cli).min_level, LogLevel::Error);
        assert_eq!(cli.model, ImageModel::DallE3);
        assert_eq!(cli.size, ImageSize::Square1024);

        let cli = Cli::parse_from(["rgen-image", "--verbose", "--size", "512x512"]);
        assert_eq!(logger_config(&cli).min_level, LogLevel::Debug);
        assert_eq!(cli.size, ImageSize::Square512);

        let cli = Cli::parse_from(["rgen-image", "--json-logs"]);
        assert!(logger_config(&cli).output_json);
    }
}
