use {
    anyhow::Context,
    clap::Parser,
    log::error,
    pretty_env_logger::init,
    std::process::ExitCode,
    vk_caps::{Category, ProviderConfig, Snapshot, VulkanProvider},
};

/// Prints the capabilities a Vulkan driver reports for a physical device.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Category to print, such as `device-limits`; may be repeated.
    ///
    /// Defaults to every category except the extension and layer lists.
    #[arg(short, long = "category", value_name = "NAME")]
    categories: Vec<Category>,

    /// Index of the physical device to query; defaults to the most capable device.
    #[arg(short, long)]
    device: Option<usize>,

    /// Lists the physical devices and exits.
    #[arg(long)]
    list: bool,

    /// Prints JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Enables the Khronos validation layer (requires a Vulkan SDK).
    #[arg(long)]
    debug: bool,

    /// Application name given to the Vulkan instance.
    #[arg(long, default_value = "Vulkan Info App")]
    app_name: String,

    /// Engine name given to the Vulkan instance.
    #[arg(long, default_value = "No engine")]
    engine_name: String,
}

fn main() -> anyhow::Result<ExitCode> {
    // Enable logging
    init();

    let args = Args::parse();

    let mut cfg = ProviderConfig::new()
        .app_name(args.app_name)
        .engine_name(args.engine_name)
        .debug(args.debug);

    if let Some(device) = args.device {
        cfg = cfg.device_index(device);
    }

    let provider = match VulkanProvider::new(cfg) {
        Ok(provider) => provider,
        Err(err) => {
            error!("unable to create provider: {err}");
            println!("capabilities unavailable");

            return Ok(ExitCode::FAILURE);
        }
    };

    if args.list {
        for (idx, name) in VulkanProvider::device_names(&provider).enumerate() {
            println!("{idx}: {name}");
        }

        return Ok(ExitCode::SUCCESS);
    }

    let categories = if args.categories.is_empty() {
        Category::DEFAULT.to_vec()
    } else {
        args.categories
    };

    let snapshot = match Snapshot::build(&categories, &provider) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!("{err}");
            println!("capabilities unavailable");

            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;

        println!("{json}");
    } else {
        print!("{snapshot}");
    }

    Ok(ExitCode::SUCCESS)
}
