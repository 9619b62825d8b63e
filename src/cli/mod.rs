//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod category;
pub mod completions;
pub mod context;
pub mod handlers;
pub mod movement;
pub mod offer;
pub mod open;
pub mod product;
pub mod status;
pub mod supplier;
pub mod validate;

pub use args::{ListArgs, OutputFormat};
pub use context::CommandContext;

/// Inventario - terminal admin console for the inventory API
#[derive(Parser, Debug)]
#[command(name = "inventario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "INVENTARIO_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "INVENTARIO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the API base address
    #[arg(long, global = true, env = "INVENTARIO_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "INVENTARIO_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in and store a session token
    Login {
        /// Account email (prompted when omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted when omitted)
        #[arg(long, short = 'p')]
        password: Option<String>,

        /// Console path to continue to after signing in
        #[arg(long)]
        return_to: Option<String>,
    },

    /// Forget the stored session token
    Logout,

    /// Show configuration and session status
    Status,

    /// Open a console location (e.g. /productos)
    Open {
        /// Console path
        #[arg(default_value = "/")]
        path: String,
    },

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Manage suppliers
    #[command(subcommand)]
    Supplier(SupplierCommands),

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommands),

    /// Manage product offers (supplier lots with price and stock)
    #[command(subcommand)]
    Offer(OfferCommands),

    /// Inspect inventory movements
    #[command(subcommand)]
    Movement(MovementCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   inventario completion bash > /etc/bash_completion.d/inventario
  zsh:    inventario completion zsh > \"${fpath[1]}/_inventario\"
  fish:   inventario completion fish > ~/.config/fish/completions/inventario.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List categories
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Create a category
    Create {
        /// Category name
        #[arg(long)]
        name: String,

        /// Create it as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a category
    Update {
        /// Category ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a category
    Delete {
        /// Category ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Optional supplier fields shared by create and update
#[derive(clap::Args, Debug, Default, Clone)]
pub struct SupplierFields {
    /// Supplier code
    #[arg(long)]
    pub code: Option<String>,

    /// Tax or national identification number
    #[arg(long)]
    pub tax_id: Option<String>,

    /// Contact email
    #[arg(long)]
    pub email: Option<String>,

    /// Contact phone
    #[arg(long)]
    pub phone: Option<String>,
}

/// Supplier subcommands
#[derive(Subcommand, Debug)]
pub enum SupplierCommands {
    /// List suppliers
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Create a supplier
    Create {
        /// Supplier name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: SupplierFields,

        /// Create it as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a supplier
    Update {
        /// Supplier ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: SupplierFields,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Delete a supplier
    Delete {
        /// Supplier ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Optional product fields shared by create and update
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product code
    #[arg(long)]
    pub code: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Brand
    #[arg(long)]
    pub brand: Option<String>,

    /// Category ID
    #[arg(long)]
    pub category_id: Option<i64>,

    /// Image URL
    #[arg(long)]
    pub image_url: Option<String>,
}

/// Product subcommands
#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products
    List {
        #[command(flatten)]
        filters: ListArgs,
    },

    /// Show one product
    Get {
        /// Product ID
        id: i64,
    },

    /// Create a product
    Create {
        /// Product name
        #[arg(long)]
        name: String,

        #[command(flatten)]
        fields: ProductFields,

        /// Create it as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update a product
    Update {
        /// Product ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: ProductFields,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },

    /// Deactivate a product
    Delete {
        /// Product ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Optional offer fields shared by create and update
#[derive(clap::Args, Debug, Default, Clone)]
pub struct OfferFields {
    /// Lot number
    #[arg(long)]
    pub lot: Option<String>,

    /// Unit price
    #[arg(long)]
    pub price: Option<f64>,

    /// Available stock
    #[arg(long)]
    pub stock: Option<i64>,

    /// Reserved stock
    #[arg(long)]
    pub reserved: Option<i64>,

    /// Currency code (default USD)
    #[arg(long)]
    pub currency: Option<String>,

    /// Expiry date (YYYY-MM-DD)
    #[arg(long)]
    pub expires: Option<String>,
}

/// Offer subcommands
#[derive(Subcommand, Debug)]
pub enum OfferCommands {
    /// List offers for a product
    List {
        /// Product ID
        #[arg(long)]
        product: i64,

        /// Maximum results to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show one offer
    Get {
        /// Offer ID
        id: i64,
    },

    /// Create an offer
    Create {
        /// Product ID
        #[arg(long)]
        product: i64,

        /// Supplier ID
        #[arg(long)]
        supplier: i64,

        #[command(flatten)]
        fields: OfferFields,

        /// Create it as inactive
        #[arg(long)]
        inactive: bool,
    },

    /// Update an offer
    Update {
        /// Offer ID
        id: i64,

        /// Move the offer to another product
        #[arg(long)]
        product: Option<i64>,

        /// Move the offer to another supplier
        #[arg(long)]
        supplier: Option<i64>,

        #[command(flatten)]
        fields: OfferFields,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },
}

/// Movement subcommands
#[derive(Subcommand, Debug)]
pub enum MovementCommands {
    /// List movements for one or more offers
    List {
        /// Offer IDs
        #[arg(required = true, num_args = 1..)]
        offer_ids: Vec<i64>,

        /// Maximum results to show
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
}
