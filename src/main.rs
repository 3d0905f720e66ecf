// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use storefront_core::config;
use storefront_core::error::{Error, Result};
use storefront_core::product::{
    options_by_kind, product_price, ProductDetail, ProductDetailForm, ProductOptionKind,
};
use storefront_core::ui::modal::{ModalLauncher, ModalStore, OpenModalOptions};
use storefront_core::ui::notifications::{ToastManager, ToastOptions};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: storefront [--quantity N] [--select KIND=SKU]... <product.json>

Options:
  --quantity N        Number of units (default 1)
  --select KIND=SKU   Pick the option with SKU for KIND (size, colour,
                      drawerFront, slabtop, handles)
  -h, --help          Print this help
";

struct Flags {
    quantity: u32,
    selections: Vec<(ProductOptionKind, String)>,
    product_path: PathBuf,
}

fn parse_selection(arg: &str) -> std::result::Result<(ProductOptionKind, String), String> {
    let (kind, sku) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected KIND=SKU, got '{arg}'"))?;
    let kind = ProductOptionKind::parse(kind.trim())
        .ok_or_else(|| format!("unknown option kind '{kind}'"))?;
    Ok((kind, sku.trim().to_string()))
}

fn parse_flags() -> Result<Option<Flags>> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let quantity = args.opt_value_from_str("--quantity")?.unwrap_or(1);
    let selections = args.values_from_fn("--select", parse_selection)?;
    let product_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| Error::Parse("missing <product.json> argument".to_string()))?;

    Ok(Some(Flags {
        quantity,
        selections,
        product_path,
    }))
}

/// Builds the form from the first option of each kind, then applies the
/// explicit `--select` choices. Unknown SKUs raise a warning toast.
fn configure(detail: &ProductDetail, flags: &Flags, toasts: &ToastManager) -> ProductDetailForm {
    let mut form = ProductDetailForm::new(detail.product.uid.clone(), flags.quantity);
    for kind in ProductOptionKind::ALL {
        if let Some(first) = options_by_kind(detail, kind).first() {
            form.select(kind, first.clone());
        }
    }

    for (kind, sku) in &flags.selections {
        match options_by_kind(detail, *kind)
            .iter()
            .find(|option| option.sku_code == *sku)
        {
            Some(option) => form.select(*kind, option.clone()),
            None => {
                toasts.warning(
                    format!("No {kind} option with SKU {sku}"),
                    ToastOptions::new().title("Unknown option"),
                );
            }
        }
    }
    form
}

fn summary(detail: &ProductDetail, form: &ProductDetailForm, total: u64) -> String {
    let mut lines = vec![detail.product.name.clone()];
    for (kind, option) in form.selections() {
        if option.uid.is_empty() {
            continue;
        }
        lines.push(format!(
            "  {kind:<13} {:<20} {:>8} {}",
            option.display_name, option.sku_code, option.price
        ));
    }
    lines.push(format!("  {:<13} {}", "Quantity", form.quantity));
    lines.push(format!("  {:<13} {total}", "Total"));
    lines.join("\n")
}

async fn run(flags: Flags) -> Result<()> {
    let (settings, warning) = config::load();
    let toasts = ToastManager::with_config(settings.toast.to_config());
    if let Some(warning) = warning {
        toasts.warning(warning, ToastOptions::new().title("Settings"));
    }
    let launcher: ModalLauncher<String> =
        ModalLauncher::new(ModalStore::with_defaults(settings.modal.to_defaults()));

    let detail = ProductDetail::from_path(&flags.product_path)?;
    debug!(product = %detail.product.slug, option_types = detail.option_types.len(), "product loaded");

    let form = configure(&detail, &flags, &toasts);
    let total = product_price(Some(&form));
    let text = summary(&detail, &form, total);

    let id = launcher.open_modal_with_node(
        || text,
        OpenModalOptions::new(format!("{} summary", detail.product.name)),
    );
    if let (Some(modal), Some(data)) = (
        launcher.store().get_modal(&id),
        launcher.store().get_modal_data(&id),
    ) {
        println!("[{} | {}]", modal.title, modal.position);
        if let Some(content) = data.content() {
            println!("{}", content.resolve().await);
        }
    }
    launcher.close_all_modals();

    toasts.success(format!("Total: {total}"), ToastOptions::new());
    for toast in toasts.active().iter().rev() {
        match toast.title() {
            Some(title) => println!("({}) {title}: {}", toast.kind(), toast.message()),
            None => println!("({}) {}", toast.kind(), toast.message()),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(flags).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
