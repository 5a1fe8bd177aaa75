use cartz::api::CartzApi;
use cartz::catalog;
use cartz::commands::ProductPatch;
use cartz::error::{CartzError, Result};
use cartz::model::{List, Product};
use cartz::notify::Notifier;
use cartz::store::fs::FileStore;
use clap::Parser;
use console::style;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Prints notifications straight to the terminal. The library core never
/// does this itself; the binary is the composition root that decides
/// what "show an alert" means.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn error(&self, message: &str) {
        eprintln!("{} {}", style("error:").red().bold(), message);
    }

    fn success(&self, message: &str) {
        println!("{} {}", style("ok:").green().bold(), message);
    }
}

struct AppContext {
    api: CartzApi<FileStore, TerminalNotifier>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Lists { archived }) => handle_lists(&ctx, archived),
        Some(Commands::Create { name }) => handle_create(&mut ctx, name),
        Some(Commands::Rename { id, name }) => {
            ctx.api.rename_list(id, name);
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            ctx.api.delete_list(id);
            Ok(())
        }
        Some(Commands::Archive { id }) => {
            ctx.api.archive_list(id);
            Ok(())
        }
        Some(Commands::Restore { id }) => {
            ctx.api.restore_list(id);
            Ok(())
        }
        Some(Commands::Show { id }) => handle_show(&ctx, id),
        Some(Commands::Add {
            list_id,
            name,
            category,
            quantity,
            unit,
        }) => handle_add(&mut ctx, list_id, name, category, quantity, unit),
        Some(Commands::Remove { list_id, name }) => {
            ctx.api.remove_product(&name, list_id);
            Ok(())
        }
        Some(Commands::Buy { list_id, name }) => {
            ctx.api.purchase_product(&name, list_id);
            Ok(())
        }
        Some(Commands::Edit {
            list_id,
            name,
            new_name,
            category,
            quantity,
            unit,
        }) => handle_edit(&mut ctx, list_id, name, new_name, category, quantity, unit),
        Some(Commands::Categories) => handle_categories(),
        None => handle_lists(&ctx, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    let store = FileStore::new(data_dir);
    let api = CartzApi::new(store, TerminalNotifier);
    Ok(AppContext { api })
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "cartz", "cartz")
        .ok_or_else(|| CartzError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_lists(ctx: &AppContext, archived: bool) -> Result<()> {
    let lists = if archived {
        ctx.api.get_archived_lists()
    } else {
        ctx.api.get_active_lists()
    };

    if lists.is_empty() {
        let what = if archived { "archived lists" } else { "lists" };
        println!("No {} yet.", what);
        return Ok(());
    }

    for list in &lists {
        print_list_line(list);
    }
    Ok(())
}

fn handle_create(ctx: &mut AppContext, name: String) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CartzError::Api("List name cannot be empty".into()));
    }
    ctx.api.create_list(List::new(name));
    Ok(())
}

fn handle_show(ctx: &AppContext, id: u32) -> Result<()> {
    let list = ctx.api.get_list(id);
    if list.id == 0 {
        println!("No list with id {}.", id);
        return Ok(());
    }

    print_list_line(&list);
    for product in &list.products {
        let mark = if product.purchased {
            style("[x]").green()
        } else {
            style("[ ]").dim()
        };
        let quantity = format_quantity(product);
        println!(
            "  {} {}  {}  {}",
            mark,
            product.name,
            quantity,
            style(&product.category.name).dim()
        );
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    list_id: u32,
    name: String,
    category_id: u32,
    quantity: u32,
    unit: String,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CartzError::Api("Product name cannot be empty".into()));
    }
    let category = catalog::by_id(category_id)
        .ok_or_else(|| CartzError::Api(format!("Unknown category id: {category_id}")))?;

    let mut product = Product::new(name, category.clone());
    product.quantity = quantity;
    product.unit = unit;

    ctx.api.add_product(product, list_id);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    list_id: u32,
    name: String,
    new_name: Option<String>,
    category_id: Option<u32>,
    quantity: Option<u32>,
    unit: Option<String>,
) -> Result<()> {
    let category = match category_id {
        Some(id) => Some(
            catalog::by_id(id)
                .ok_or_else(|| CartzError::Api(format!("Unknown category id: {id}")))?
                .clone(),
        ),
        None => None,
    };

    let patch = ProductPatch {
        name: new_name,
        category,
        quantity,
        unit,
    };
    if patch.is_empty() {
        println!("Nothing to change.");
        return Ok(());
    }

    ctx.api.update_product(&name, list_id, patch);
    Ok(())
}

fn handle_categories() -> Result<()> {
    for category in catalog::all() {
        println!("{:>3}  {}", category.id, category.name);
    }
    Ok(())
}

fn print_list_line(list: &List) {
    let purchased = list.products.iter().filter(|p| p.purchased).count();
    let progress = format!("{}/{}", purchased, list.products.len());
    let name = if list.archived {
        style(&list.name).dim().to_string()
    } else {
        style(&list.name).bold().to_string()
    };
    println!("{}  {}  {}", style(list.id).cyan(), name, progress);
}

fn format_quantity(product: &Product) -> String {
    if product.unit.is_empty() {
        product.quantity.to_string()
    } else {
        format!("{} {}", product.quantity, product.unit)
    }
}
