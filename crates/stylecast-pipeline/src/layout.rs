//! Layout geometry resolution.
//!
//! Normalizes box/grid geometry (container width, breakout, gap,
//! per-breakpoint column counts for the aside archetypes) into a
//! responsive custom-property block, and carries the static companion
//! sheets (structure, landmarks, areas, utilities) that consume those
//! properties. Breakpoints are fixed: `ty` 30rem, `tx` 48rem, `d` 64rem.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::clamp::{clamp, px_to_rem_css, ClampSize};
use crate::css::{CssNode, Decl, Declarations};
use crate::error::CompileError;
use crate::report::ErrorReport;

pub mod sheets;

const ARCHETYPES: [&str; 3] = ["aside-single", "aside-left", "aside-right"];

/// Column counts allowed for a single-aside layout.
const SINGLE_DOMAIN: [u64; 3] = [0, 2, 4];

/// Column counts allowed for the left/right aside layouts.
const DOUBLE_DOMAIN: [u64; 4] = [0, 2, 3, 4];

/// Per-archetype column counts, one entry per responsive tier
/// (base, ty, tx, d).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColumnsCount {
    #[serde(rename = "aside-single", default)]
    pub aside_single: Option<[u32; 4]>,
    #[serde(rename = "aside-left", default)]
    pub aside_left: Option<[u32; 4]>,
    #[serde(rename = "aside-right", default)]
    pub aside_right: Option<[u32; 4]>,
}

impl ColumnsCount {
    fn tier(counts: &Option<[u32; 4]>, index: usize, fallback: u32) -> u32 {
        counts.map(|c| c[index]).unwrap_or(fallback)
    }
}

/// Sanitized layout module config.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutData {
    #[serde(default)]
    pub container: Option<f64>,
    #[serde(default)]
    pub gap: Option<ClampSize>,
    #[serde(default)]
    pub breakout: Option<f64>,
    #[serde(default)]
    pub columns_count: Option<ColumnsCount>,
    #[serde(default)]
    pub extra_margin: Option<f64>,
}

/// Validates the raw layout config and returns the sanitized form.
pub fn validate(data: &Value) -> Result<LayoutData, CompileError> {
    let mut report = ErrorReport::new();

    let Some(object) = data.as_object() else {
        report.push("layout: config 'data' must be an object");
        return Err(CompileError::Validation(report));
    };

    for key in object.keys() {
        if !matches!(
            key.as_str(),
            "container" | "gap" | "breakout" | "columnsCount" | "extraMargin"
        ) {
            report.push(format!("layout: unknown field \"{}\"", key));
        }
    }

    for field in ["container", "breakout", "extraMargin"] {
        if let Some(value) = object.get(field) {
            if !value.is_number() {
                report.push(format!("layout: '{}' must be a number (e.g. 1280)", field));
            }
        }
    }

    if let Some(gap) = object.get("gap") {
        if !gap.is_array() {
            report.push("layout: 'gap' must be a size array (e.g. [16, 24, [768, 1024]])");
        }
    }

    if let Some(columns) = object.get("columnsCount") {
        validate_columns(columns, &mut report);
    }

    report.into_result(())?;
    let sanitized: LayoutData = serde_json::from_value(data.clone())?;
    Ok(sanitized)
}

fn validate_columns(columns: &Value, report: &mut ErrorReport) {
    let Some(object) = columns.as_object() else {
        report.push("layout: 'columnsCount' must be an object");
        return;
    };

    for (key, value) in object {
        if !ARCHETYPES.contains(&key.as_str()) {
            report.push(format!(
                "layout: invalid key in 'columnsCount': \"{}\" (valid keys are {})",
                key,
                ARCHETYPES.join(", ")
            ));
            continue;
        }

        let Some(counts) = value.as_array().filter(|counts| counts.len() == 4) else {
            report.push(format!(
                "layout: '{}' must be an array of exactly 4 numbers",
                key
            ));
            continue;
        };

        let domain: &[u64] = if key == "aside-single" {
            &SINGLE_DOMAIN
        } else {
            &DOUBLE_DOMAIN
        };
        for count in counts {
            match count.as_u64() {
                Some(n) if domain.contains(&n) => {}
                Some(n) => report.push(format!(
                    "layout: '{}' count {} is outside the allowed set {:?}",
                    key, n, domain
                )),
                None => report.push(format!(
                    "layout: '{}' must contain only numeric values",
                    key
                )),
            }
        }
    }
}

/// Resolves a sanitized layout config into the base geometry sheet.
///
/// Emits the breakpoint tokens plus one `[data-layout]` block holding
/// the geometry custom properties at the base tier and three
/// min-width overrides substituting per-tier column counts.
pub fn resolve(data: &LayoutData) -> Result<Vec<CssNode>, CompileError> {
    let container = data.container.map(px_to_rem_css).unwrap_or_default();
    let breakout = data.breakout.map(px_to_rem_css).unwrap_or_default();
    let gap = match &data.gap {
        Some(size) => clamp(size)?,
        None => Default::default(),
    };
    let extra_margin = data
        .extra_margin
        .map(|px| px_to_rem_css(px).to_string())
        .unwrap_or_else(|| "0.25rem".to_string());
    let columns = data.columns_count.clone().unwrap_or_default();

    let breakpoints = CssNode::rule(
        "@theme",
        IndexMap::from([
            ("--breakpoint-ty".to_string(), Decl::Value("30rem".into())),
            ("--breakpoint-tx".to_string(), Decl::Value("48rem".into())),
            ("--breakpoint-d".to_string(), Decl::Value("64rem".into())),
        ]),
    );

    let mut block = Declarations::new();
    block.insert(
        "--layout-container".to_string(),
        Decl::Value(container.to_string()),
    );
    block.insert("--layout-columns-count".to_string(), Decl::Value("2".into()));
    block.insert("--layout-gap".to_string(), Decl::Value(gap.to_string()));
    block.insert(
        "--layout-breakout".to_string(),
        Decl::Value(breakout.to_string()),
    );
    insert_counts(&mut block, &columns, 0, (0, 0, 0));
    block.insert(
        "--layout-extra-margin".to_string(),
        Decl::Value(extra_margin),
    );

    for (query, total, tier) in [
        ("@media (min-width: 30rem)", "4", 1),
        ("@media (min-width: 48rem)", "6", 2),
    ] {
        let mut overrides = Declarations::new();
        overrides.insert(
            "--layout-columns-count".to_string(),
            Decl::Value(total.into()),
        );
        insert_counts(&mut overrides, &columns, tier, (0, 0, 0));
        block.insert(query.to_string(), Decl::Block(overrides));
    }

    // Desktop tier: unset aside counts fall back to 4 (single) / 3 (double).
    let mut desktop = Declarations::new();
    desktop.insert("--layout-columns-count".to_string(), Decl::Value("12".into()));
    insert_counts(&mut desktop, &columns, 3, (4, 3, 3));
    block.insert(
        "@media (min-width: 64rem)".to_string(),
        Decl::Block(desktop),
    );

    let base = CssNode::rule(
        "@layer base",
        IndexMap::from([("[data-layout]".to_string(), Decl::Block(block))]),
    );

    Ok(vec![breakpoints, base])
}

fn insert_counts(
    declarations: &mut Declarations,
    columns: &ColumnsCount,
    tier: usize,
    fallbacks: (u32, u32, u32),
) {
    declarations.insert(
        "--layout-single-aside-columns-count".to_string(),
        Decl::Value(ColumnsCount::tier(&columns.aside_single, tier, fallbacks.0).to_string()),
    );
    declarations.insert(
        "--layout-aside-left-columns-count".to_string(),
        Decl::Value(ColumnsCount::tier(&columns.aside_left, tier, fallbacks.1).to_string()),
    );
    declarations.insert(
        "--layout-aside-right-columns-count".to_string(),
        Decl::Value(ColumnsCount::tier(&columns.aside_right, tier, fallbacks.2).to_string()),
    );
}
