use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cartz")]
#[command(about = "Local-first shopping list manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Override the data directory holding the list store
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List shopping lists
    #[command(alias = "ls")]
    Lists {
        /// Show archived lists instead of active ones
        #[arg(long)]
        archived: bool,
    },

    /// Create a new shopping list
    #[command(alias = "n")]
    Create {
        /// Name of the list
        name: String,
    },

    /// Rename a list
    Rename {
        /// Id of the list
        id: u32,
        /// New name
        name: String,
    },

    /// Delete a list permanently
    #[command(alias = "rm")]
    Delete {
        /// Id of the list
        id: u32,
    },

    /// Move a list to the archive
    Archive {
        /// Id of the list
        id: u32,
    },

    /// Bring an archived list back
    Restore {
        /// Id of the list
        id: u32,
    },

    /// Show one list with its products
    #[command(alias = "s")]
    Show {
        /// Id of the list
        id: u32,
    },

    /// Add a product to a list
    #[command(alias = "a")]
    Add {
        /// Id of the list
        list_id: u32,
        /// Product name (unique within the list)
        name: String,
        /// Category id (see `cartz categories`)
        #[arg(short, long, default_value_t = 22)]
        category: u32,
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
        /// Free-text unit, e.g. "kg"
        #[arg(short, long, default_value = "")]
        unit: String,
    },

    /// Remove a product from a list
    Remove {
        /// Id of the list
        list_id: u32,
        /// Product name
        name: String,
    },

    /// Toggle a product's purchased state
    #[command(alias = "b")]
    Buy {
        /// Id of the list
        list_id: u32,
        /// Product name
        name: String,
    },

    /// Edit product details; omitted flags leave fields untouched
    Edit {
        /// Id of the list
        list_id: u32,
        /// Product name
        name: String,
        /// New product name
        #[arg(long)]
        new_name: Option<String>,
        /// New category id
        #[arg(long)]
        category: Option<u32>,
        /// New quantity (0 is a valid value)
        #[arg(long)]
        quantity: Option<u32>,
        /// New unit
        #[arg(long)]
        unit: Option<String>,
    },

    /// Show the category catalog
    Categories,
}
