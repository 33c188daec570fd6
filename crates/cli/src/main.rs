//! Terminal rehearsal tool for the sales deck: prints the outline,
//! per-slide content and notes, and the investment calculator output.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use pitch_core::{BillingPeriod, Controller, PlatformCount, SlideKind};
use serde_json::json;

/// Inspect the sales deck from the terminal.
#[derive(Parser, Debug)]
#[command(name = "pitch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show one slide's resolved content and presenter note
    #[arg(short, long)]
    slide: Option<usize>,

    /// Include presenter notes in the outline
    #[arg(short, long)]
    notes: bool,

    /// Print the investment pricing breakdown
    #[arg(short, long)]
    pricing: bool,

    /// Number of core platforms for the calculator (1 or 2)
    #[arg(long, default_value = "1")]
    platforms: u8,

    /// Billing period for ongoing costs
    #[arg(long, value_enum, default_value_t = Billing::Annual)]
    billing: Billing,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Billing {
    Monthly,
    Annual,
}

impl From<Billing> for BillingPeriod {
    fn from(billing: Billing) -> Self {
        match billing {
            Billing::Monthly => BillingPeriod::Monthly,
            Billing::Annual => BillingPeriod::Annual,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let platform_count = match args.platforms {
        1 => PlatformCount::One,
        2 => PlatformCount::Two,
        n => bail!("--platforms must be 1 or 2 (got {})", n),
    };

    let mut controller = Controller::default();
    controller.set_platform_count(platform_count);
    controller.set_billing_period(args.billing.into());
    log::debug!(
        "deck loaded: {} slides, platforms={:?}",
        controller.deck().len(),
        platform_count
    );

    if args.pricing {
        print_pricing(&controller, args.json)
    } else if let Some(index) = args.slide {
        print_slide(&controller, index, args.json)
    } else {
        print_outline(&controller, args.notes, args.json)
    }
}

/// Slide-by-slide listing: index, kind, headline.
fn print_outline(controller: &Controller, with_notes: bool, as_json: bool) -> Result<()> {
    if as_json {
        let slides: Vec<_> = controller
            .deck()
            .iter()
            .map(|slide| {
                json!({
                    "index": slide.index,
                    "kind": slide.kind,
                    "title": slide.title(),
                    "note": with_notes.then(|| controller.note(slide.index)),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&slides)?);
        return Ok(());
    }

    for slide in controller.deck().iter() {
        println!(
            "{:>2}. [{}] {}",
            slide.index + 1,
            kind_label(slide.kind),
            slide.title().unwrap_or("")
        );
        if with_notes {
            if let Some(note) = controller.note(slide.index) {
                println!("      {}", note);
            }
        }
    }
    Ok(())
}

/// One slide's resolved fields plus its presenter note.
fn print_slide(controller: &Controller, index: usize, as_json: bool) -> Result<()> {
    let Some(slide) = controller.deck().slide(index) else {
        bail!(
            "slide {} is out of range (deck has {} slides)",
            index,
            controller.deck().len()
        );
    };

    if as_json {
        let fields: Vec<_> = slide
            .fields
            .iter()
            .map(|field| {
                json!({
                    "key": field.key,
                    "text": controller.resolve_content(field.key),
                })
            })
            .collect();
        let out = json!({
            "index": slide.index,
            "kind": slide.kind,
            "fields": fields,
            "note": controller.note(index),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Slide {} of {} [{}]", index + 1, controller.deck().len(), kind_label(slide.kind));
    for field in slide.fields {
        println!("  {:<24} {}", field.key, controller.resolve_content(field.key).unwrap_or(""));
    }
    if let Some(note) = controller.note(index) {
        println!("  note: {}", note);
    }
    Ok(())
}

/// The investment calculator output for the chosen inputs.
fn print_pricing(controller: &Controller, as_json: bool) -> Result<()> {
    let breakdown = controller.pricing();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    let unit = match breakdown.billing_period {
        BillingPeriod::Annual => "yr",
        BillingPeriod::Monthly => "mo",
    };

    println!("One-Time Integration: {}", usd(breakdown.integration_cost));
    println!("Ongoing Investment:");
    for item in &breakdown.line_items {
        println!("  {:<36} {}/{}", item.name, usd(item.display), unit);
    }
    println!("  {:<36} {}/{}", "Total Ongoing", usd(breakdown.display_ongoing), unit);
    println!("YEAR 1 TOTAL: {}", usd(breakdown.total_year1));
    Ok(())
}

fn kind_label(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Title => "title",
        SlideKind::Content => "content",
        SlideKind::Custom => "custom",
    }
}

/// Dollar amount with thousands separators, e.g. `$42,500`.
fn usd(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::from("$");
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
