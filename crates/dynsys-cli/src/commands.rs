use std::fmt;
use std::io::Write;

use clap::Args;
use dynsys::{
    DynamicSystem, Element, LayoutConfig, Node, Seed, SeedParams, StructureDecision, VariantKind,
};
use serde::Serialize;

use crate::error::{CliError, Result};
use crate::output::emit;

// ---------------------------------------------------------------------------
// Seed arguments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Seed; missing or out-of-range values use the canonical seed 1.
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// URL query carrying `seed` and `seed-structure`, e.g. `?seed=5&seed-structure=7`.
    #[arg(long, conflicts_with = "seed")]
    pub query: Option<String>,
}

impl SeedArgs {
    #[must_use]
    pub fn from_raw(seed: i64) -> Self {
        Self {
            seed: Some(seed),
            query: None,
        }
    }

    pub fn resolve(&self, system: &DynamicSystem) -> SeedParams {
        match &self.query {
            Some(query) => SeedParams::from_query_in(query, system.config().max_seed),
            None => SeedParams::uniform(system.normalize_seed(self.seed)),
        }
    }
}

// ---------------------------------------------------------------------------
// variant
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct VariantArgs {
    /// Component key, e.g. `search-input`.
    pub key: String,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Restrict lookup to one dictionary: id, class or text.
    #[arg(long)]
    pub kind: Option<VariantKind>,

    /// Value returned when the key is unknown.
    #[arg(long)]
    pub fallback: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VariantReport {
    pub seed: Seed,
    pub key: String,
    pub kind: Option<VariantKind>,
    pub value: String,
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

pub fn run_variant<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: VariantArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let seed = args.seed.resolve(system).seed;
    let fallback = args.fallback.as_deref();
    let (kind, value) = match args.kind {
        Some(kind) => (Some(kind), system.get_variant_of(kind, seed, &args.key, fallback)),
        None => (
            system.registry().lookup(&args.key).map(|(kind, _)| kind),
            system.get_variant(seed, &args.key, None, fallback),
        ),
    };
    emit(
        out,
        json,
        &VariantReport {
            seed,
            key: args.key,
            kind,
            value,
        },
    )
}

// ---------------------------------------------------------------------------
// order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct OrderArgs {
    /// Ordering key, e.g. `cart-items`.
    pub key: String,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Number of items to permute.
    #[arg(long, conflicts_with = "items")]
    pub count: Option<usize>,

    /// Comma-separated items to reorder.
    #[arg(long, value_delimiter = ',')]
    pub items: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct OrderReport {
    pub seed: Seed,
    pub key: String,
    pub order: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
}

impl fmt::Display for OrderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.items {
            Some(items) => f.write_str(&items.join("\n")),
            None => {
                let order: Vec<String> = self.order.iter().map(usize::to_string).collect();
                f.write_str(&order.join(" "))
            }
        }
    }
}

pub fn run_order<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: OrderArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let seed = args.seed.resolve(system).seed;
    let report = match (args.count, args.items) {
        (_, Some(items)) => {
            let order = system.generate_order(seed, &args.key, items.len());
            let reordered = order.iter().map(|&i| items[i].clone()).collect();
            OrderReport {
                seed,
                key: args.key,
                order,
                items: Some(reordered),
            }
        }
        (Some(count), None) => OrderReport {
            seed,
            order: system.generate_order(seed, &args.key, count),
            key: args.key,
            items: None,
        },
        (None, None) => return Err(CliError::invalid("order needs --count or --items")),
    };
    emit(out, json, &report)
}

// ---------------------------------------------------------------------------
// structure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct StructureArgs {
    /// Component key, e.g. `search-button`.
    pub key: String,

    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Debug, Serialize)]
pub struct StructureReport {
    pub seed: Seed,
    pub key: String,
    #[serde(flatten)]
    pub decision: StructureDecision,
}

impl fmt::Display for StructureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrap={} decoy={}", self.decision.wrap, self.decision.decoy)
    }
}

pub fn run_structure<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: StructureArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let seed = args.seed.resolve(system).structure_seed;
    let decision = system.decide_structure(seed, &args.key);
    emit(
        out,
        json,
        &StructureReport {
            seed,
            key: args.key,
            decision,
        },
    )
}

// ---------------------------------------------------------------------------
// wrap
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct WrapArgs {
    /// Component key, e.g. `search-button`.
    pub key: String,

    #[command(flatten)]
    pub seed: SeedArgs,

    /// Tag of the element to wrap.
    #[arg(long, default_value = "button")]
    pub tag: String,

    /// Text content of the element.
    #[arg(long)]
    pub text: Option<String>,

    /// Skip the seeded `id`/`class` for the key.
    #[arg(long)]
    pub no_identity: bool,
}

#[derive(Debug, Serialize)]
pub struct WrapReport {
    pub seed: Seed,
    pub key: String,
    pub html: String,
}

impl fmt::Display for WrapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

pub fn run_wrap<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: WrapArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if args.tag.is_empty() || !args.tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CliError::invalid(format!("bad tag name `{}`", args.tag)));
    }
    let params = args.seed.resolve(system);
    let mut element = Element::new(args.tag);
    if let Some(text) = args.text {
        element = element.child(Node::text(text));
    }
    if !args.no_identity {
        element = system.apply_identity(element, params.seed, &args.key);
    }
    let node = system.add_wrap_decoy(params.structure_seed, &args.key, element.into());
    emit(
        out,
        json,
        &WrapReport {
            seed: params.structure_seed,
            key: args.key,
            html: node.to_html(),
        },
    )
}

// ---------------------------------------------------------------------------
// layout / layout-table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub seed: Seed,
    pub layout: &'static LayoutConfig,
}

impl fmt::Display for LayoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        let regions: Vec<&str> = layout.regions.iter().map(|r| r.as_str()).collect();
        write!(
            f,
            "layout {} ({}) container={} regions={}",
            layout.index,
            layout.name,
            layout.container.as_str(),
            regions.join(",")
        )?;
        if let Some(areas) = layout.grid_template {
            write!(f, " areas={areas}")?;
        }
        Ok(())
    }
}

pub fn run_layout<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: LayoutArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let seed = args.seed.resolve(system).seed;
    emit(
        out,
        json,
        &LayoutReport {
            seed,
            layout: system.seed_layout(seed),
        },
    )
}

#[derive(Debug, Clone, Args)]
pub struct LayoutTableArgs {
    /// First seed of the range.
    #[arg(long, default_value_t = 1)]
    pub from: u16,

    /// Last seed of the range; defaults to the configured maximum.
    #[arg(long)]
    pub to: Option<u16>,
}

#[derive(Debug, Serialize)]
pub struct LayoutRow {
    pub seed: u16,
    pub layout: u8,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LayoutTable {
    pub rows: Vec<LayoutRow>,
}

impl fmt::Display for LayoutTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>5}  {:>6}  name", "seed", "layout")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>5}  {:>6}  {}", row.seed, row.layout, row.name)?;
        }
        Ok(())
    }
}

pub fn run_layout_table<W: Write + ?Sized>(
    system: &DynamicSystem,
    args: LayoutTableArgs,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let max = system.config().max_seed;
    let to = args.to.unwrap_or(max).min(max);
    if args.from == 0 || args.from > to {
        return Err(CliError::invalid(format!(
            "seed range {}..={to} is empty or outside 1..={max}",
            args.from
        )));
    }
    let rows = (args.from..=to)
        .map(|raw| {
            let layout = system.seed_layout_raw(Some(i64::from(raw)));
            LayoutRow {
                seed: raw,
                layout: layout.index,
                name: layout.name,
            }
        })
        .collect();
    emit(out, json, &LayoutTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dynsys::EngineConfig;

    fn enabled() -> DynamicSystem {
        DynamicSystem::new(EngineConfig::ENABLED)
    }

    fn capture(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("command succeeds");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn seed_args_prefer_query() {
        let system = enabled();
        let args = SeedArgs {
            seed: None,
            query: Some("?seed=5&seed-structure=7".into()),
        };
        let params = args.resolve(&system);
        assert_eq!(params.seed.get(), 5);
        assert_eq!(params.structure_seed.get(), 7);
        assert_eq!(SeedArgs::from_raw(-3).resolve(&system).seed, Seed::CANONICAL);
    }

    #[test]
    fn variant_fallback() {
        let text = capture(|out| {
            run_variant(
                &enabled(),
                VariantArgs {
                    key: "nonexistent-key".into(),
                    seed: SeedArgs::from_raw(9),
                    kind: None,
                    fallback: Some("fallbackValue".into()),
                },
                false,
                out,
            )
        });
        assert_eq!(text, "fallbackValue\n");
    }

    #[test]
    fn variant_reports_kind() {
        let text = capture(|out| {
            run_variant(
                &enabled(),
                VariantArgs {
                    key: "checkout-label".into(),
                    seed: SeedArgs::from_raw(1),
                    kind: None,
                    fallback: None,
                },
                true,
                out,
            )
        });
        let value: serde_json::Value = serde_json::from_str(text.trim()).expect("json");
        assert_eq!(value["kind"], "text");
        assert_eq!(value["value"], "Checkout");
        assert_eq!(value["seed"], 1);
    }

    #[test]
    fn order_items_are_reordered() {
        let text = capture(|out| {
            run_order(
                &enabled(),
                OrderArgs {
                    key: "cart-items".into(),
                    seed: SeedArgs::from_raw(2),
                    count: None,
                    items: Some(vec!["a".into(), "b".into(), "c".into(), "d".into()]),
                },
                false,
                out,
            )
        });
        assert_eq!(text, "a\nb\nd\nc\n");
    }

    #[test]
    fn structure_human_output() {
        let text = capture(|out| {
            run_structure(
                &enabled(),
                StructureArgs {
                    key: "search-button".into(),
                    seed: SeedArgs::from_raw(5),
                },
                false,
                out,
            )
        });
        assert_eq!(text, "wrap=true decoy=none\n");
    }

    #[test]
    fn wrap_renders_html() {
        let text = capture(|out| {
            run_wrap(
                &DynamicSystem::new(EngineConfig::DISABLED.with_structure(true)),
                WrapArgs {
                    key: "search-button".into(),
                    seed: SeedArgs::from_raw(5),
                    tag: "button".into(),
                    text: Some("Search".into()),
                    no_identity: false,
                },
                false,
                out,
            )
        });
        assert_eq!(
            text.trim_end(),
            concat!(
                r#"<span style="display:contents" data-wrapper="search-button">"#,
                r#"<button id="search-button" class="btn btn-primary">Search</button></span>"#
            )
        );
    }

    #[test]
    fn wrap_rejects_bad_tag() {
        let mut buf = Vec::new();
        let result = run_wrap(
            &enabled(),
            WrapArgs {
                key: "k".into(),
                seed: SeedArgs::default(),
                tag: "a b".into(),
                text: None,
                no_identity: true,
            },
            false,
            &mut buf,
        );
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }

    #[test]
    fn layout_human_output() {
        let text = capture(|out| {
            run_layout(
                &enabled(),
                LayoutArgs {
                    seed: SeedArgs::from_raw(1),
                },
                false,
                out,
            )
        });
        assert_eq!(
            text,
            "layout 1 (classic) container=flex-column regions=header,sidebar,content,footer\n"
        );
    }

    #[test]
    fn layout_table_range() {
        let text = capture(|out| {
            run_layout_table(
                &enabled(),
                LayoutTableArgs {
                    from: 7,
                    to: Some(9),
                },
                true,
                out,
            )
        });
        let value: serde_json::Value = serde_json::from_str(text.trim()).expect("json");
        let layouts: Vec<u64> = value["rows"]
            .as_array()
            .expect("rows")
            .iter()
            .filter_map(|row| row["layout"].as_u64())
            .collect();
        assert_eq!(layouts, [8, 1, 10]);
    }

    #[test]
    fn layout_table_rejects_empty_range() {
        let mut buf = Vec::new();
        let result = run_layout_table(
            &enabled(),
            LayoutTableArgs {
                from: 10,
                to: Some(3),
            },
            false,
            &mut buf,
        );
        assert!(matches!(result, Err(CliError::InvalidArgument { .. })));
    }
}
