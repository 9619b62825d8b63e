//! Inventario - terminal admin console for the inventory API

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod router;
mod session;

use cli::args::GlobalOptions;
use cli::{
    CategoryCommands, Cli, Commands, MovementCommands, OfferCommands, ProductCommands,
    SupplierCommands,
};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Login {
            email,
            password,
            return_to,
        } => {
            cli::auth::login(
                &opts,
                email.as_deref(),
                password.as_deref(),
                return_to.as_deref(),
            )
            .await
        }
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Open { path } => cli::open::run(&opts, &path).await,
        Commands::Category(cmd) => match cmd {
            CategoryCommands::List { filters } => cli::category::list(&opts, &filters).await,
            CategoryCommands::Create { name, inactive } => {
                cli::category::create(&opts, &name, inactive).await
            }
            CategoryCommands::Update { id, name, active } => {
                cli::category::update(&opts, id, name.as_deref(), active).await
            }
            CategoryCommands::Delete { id, yes } => cli::category::delete(&opts, id, yes).await,
        },
        Commands::Supplier(cmd) => match cmd {
            SupplierCommands::List { filters } => cli::supplier::list(&opts, &filters).await,
            SupplierCommands::Create {
                name,
                fields,
                inactive,
            } => cli::supplier::create(&opts, &name, &fields, inactive).await,
            SupplierCommands::Update {
                id,
                name,
                fields,
                active,
            } => cli::supplier::update(&opts, id, name.as_deref(), &fields, active).await,
            SupplierCommands::Delete { id, yes } => cli::supplier::delete(&opts, id, yes).await,
        },
        Commands::Product(cmd) => match cmd {
            ProductCommands::List { filters } => cli::product::list(&opts, &filters).await,
            ProductCommands::Get { id } => cli::product::get(&opts, id).await,
            ProductCommands::Create {
                name,
                fields,
                inactive,
            } => cli::product::create(&opts, &name, &fields, inactive).await,
            ProductCommands::Update {
                id,
                name,
                fields,
                active,
            } => cli::product::update(&opts, id, name.as_deref(), &fields, active).await,
            ProductCommands::Delete { id, yes } => cli::product::delete(&opts, id, yes).await,
        },
        Commands::Offer(cmd) => match cmd {
            OfferCommands::List { product, limit } => {
                cli::offer::list(&opts, product, limit).await
            }
            OfferCommands::Get { id } => cli::offer::get(&opts, id).await,
            OfferCommands::Create {
                product,
                supplier,
                fields,
                inactive,
            } => cli::offer::create(&opts, product, supplier, &fields, inactive).await,
            OfferCommands::Update {
                id,
                product,
                supplier,
                fields,
                active,
            } => {
                let changes = cli::offer::OfferChanges {
                    product_id: product,
                    supplier_id: supplier,
                    fields: Some(&fields),
                    active,
                };
                cli::offer::update(&opts, id, changes).await
            }
        },
        Commands::Movement(cmd) => match cmd {
            MovementCommands::List { offer_ids, limit } => {
                cli::movement::list(&opts, &offer_ids, limit).await
            }
        },
        Commands::Completion { shell } => cli::completions::run(shell),
    }
}
