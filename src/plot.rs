//! One-shot diagnostic plot rendering
//!
//! Two figures, both rendered synchronously to SVG:
//! - [`ps_plot`]: disorder propensity with the disorder threshold, shaded
//!   potential IDRs, and phase-separation key-residue spans
//! - [`residue_plot`]: the same propensity track overlaid with aromatic
//!   residue positions and a sliding-window net-charge profile
//!
//! The phase-separation probability shown in panel titles is a caller-supplied
//! side table; entries without a probability get a name-only title.

use crate::composition::{aromatic_positions, net_charge_profile};
use crate::error::{IdrError, Result};
use crate::intervals::contiguous_regions;
use crate::types::{DisorderRecord, RegionRecord};
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::collections::HashMap;
use std::path::Path;

/// Net-charge window of the residue plot
const CHARGE_WINDOW: usize = 10;
/// Vertical scale applied to window net charge before plotting
const CHARGE_SCALE: f64 = 0.02;
/// Baseline the scaled charge profile is centered on
const CHARGE_BASELINE: f64 = 0.8;
/// Y position of aromatic residue markers
const AROMATIC_Y: f64 = 0.4;

const PANEL_WIDTH: u32 = 900;
const PANEL_HEIGHT: u32 = 300;

const SCORE_COLOR: RGBColor = RGBColor(0x57, 0xcc, 0x99);
const REGION_COLOR: RGBColor = RGBColor(0x14, 0x7c, 0x89);
const CHARGE_COLOR: RGBColor = RGBColor(0xff, 0xa5, 0x00);
const AROMATIC_COLOR: RGBColor = RGBColor(0x80, 0x00, 0x80);
const IDR_FILL: RGBColor = RGBColor(0x80, 0x80, 0x80);

/// One plot panel's worth of data
///
/// This is the column contract the parsers feed into rendering: a display
/// name, the `fldpnn2_score` track, and optionally the residue sequence and
/// per-residue region flags from the region report.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotEntry {
    /// Display name (protein or gene name) and probability-table key
    pub name: String,
    /// Per-residue disorder propensity
    pub scores: Vec<f64>,
    /// Residue sequence; empty when unavailable
    pub aa: Vec<u8>,
    /// Per-residue region flags; empty when unavailable
    pub dregion: Vec<bool>,
}

impl PlotEntry {
    /// Build an entry from a disorder record, optionally joined with the
    /// matching region record.
    pub fn from_records(disorder: &DisorderRecord, region: Option<&RegionRecord>) -> Self {
        Self {
            name: disorder.id.clone(),
            scores: disorder.scores.clone(),
            aa: disorder.residues.clone(),
            dregion: region.map(|r| r.dregion.clone()).unwrap_or_default(),
        }
    }
}

/// Rendering options shared by both figures
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Disorder call threshold drawn on every panel
    pub threshold: f64,
    /// Identifier→phase-separation-probability side table for panel titles
    pub probabilities: HashMap<String, f64>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            threshold: 0.25,
            probabilities: HashMap::new(),
        }
    }
}

impl PlotConfig {
    fn title_for(&self, name: &str) -> String {
        match self.probabilities.get(name) {
            Some(prob) => format!("{} | Phase Separation Probability: {:.2}", name, prob),
            None => name.to_string(),
        }
    }
}

fn plot_err<E: std::fmt::Display>(e: E) -> IdrError {
    IdrError::Plot(e.to_string())
}

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

fn score_chart<'a, 'b>(
    panel: &'a Panel<'b>,
    title: &str,
    len: usize,
) -> Result<ChartContext<'a, SVGBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>> {
    let x_max = len.max(1) as f64;
    let mut chart = ChartBuilder::on(panel)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..x_max, 0f64..1f64)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Position")
        .y_desc("Disorder Propensity")
        .draw()
        .map_err(plot_err)?;

    Ok(chart)
}

fn draw_score_track(
    chart: &mut ChartContext<'_, SVGBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    scores: &[f64],
    threshold: f64,
) -> Result<()> {
    let points: Vec<(f64, f64)> = scores.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();

    // Shade only where the score rises above the threshold
    chart
        .draw_series(AreaSeries::new(
            points.iter().map(|&(x, y)| (x, y.max(threshold))),
            threshold,
            &IDR_FILL.mix(0.5),
        ))
        .map_err(plot_err)?
        .label("Potential IDRs")
        .legend(|(x, y)| Rectangle::new([(x, y - 4), (x + 10, y + 4)], IDR_FILL.mix(0.5).filled()));

    chart
        .draw_series(LineSeries::new(points, SCORE_COLOR.stroke_width(2)))
        .map_err(plot_err)?
        .label("Disorder Propensity")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], SCORE_COLOR.stroke_width(2)));

    let x_max = scores.len().max(1) as f64;
    chart
        .draw_series(DashedLineSeries::new(
            [(0.0, threshold), (x_max, threshold)],
            6,
            4,
            RED.stroke_width(1),
        ))
        .map_err(plot_err)?
        .label("Disorder Threshold")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], RED.stroke_width(1)));

    Ok(())
}

fn split_panels<'a>(
    root: &Panel<'a>,
    count: usize,
) -> Vec<Panel<'a>> {
    root.split_evenly((count, 1))
}

/// Render the phase-separation overview figure.
///
/// One panel per entry: disorder propensity, threshold, shaded potential
/// IDRs, and a shaded vertical span for every contiguous `dregion` run.
pub fn ps_plot<P: AsRef<Path>>(path: P, entries: &[PlotEntry], config: &PlotConfig) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let height = PANEL_HEIGHT * entries.len() as u32;
    let root = SVGBackend::new(path.as_ref(), (PANEL_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    for (i, (panel, entry)) in split_panels(&root, entries.len()).iter().zip(entries).enumerate() {
        let mut chart = score_chart(panel, &config.title_for(&entry.name), entry.scores.len())?;

        // Key-residue spans go underneath the score track
        let spans = contiguous_regions(&entry.dregion);
        chart
            .draw_series(spans.iter().map(|&(start, end)| {
                Rectangle::new(
                    [(start as f64, 0.0), ((end + 1) as f64, 1.0)],
                    REGION_COLOR.mix(0.3).filled(),
                )
            }))
            .map_err(plot_err)?;

        draw_score_track(&mut chart, &entry.scores, config.threshold)?;

        if i == 0 {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)
}

/// Render the residue-composition figure.
///
/// One panel per entry: disorder propensity and threshold as in [`ps_plot`],
/// plus aromatic residue markers and the net charge per 10-residue window
/// (scaled and shifted onto the propensity axis).
pub fn residue_plot<P: AsRef<Path>>(
    path: P,
    entries: &[PlotEntry],
    config: &PlotConfig,
) -> Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    let height = PANEL_HEIGHT * entries.len() as u32;
    let root = SVGBackend::new(path.as_ref(), (PANEL_WIDTH, height)).into_drawing_area();
    root.fill(&WHITE).map_err(plot_err)?;

    for (i, (panel, entry)) in split_panels(&root, entries.len()).iter().zip(entries).enumerate() {
        let mut chart = score_chart(panel, &config.title_for(&entry.name), entry.scores.len())?;

        draw_score_track(&mut chart, &entry.scores, config.threshold)?;

        chart
            .draw_series(
                aromatic_positions(&entry.aa)
                    .into_iter()
                    .map(|pos| Circle::new((pos as f64, AROMATIC_Y), 3, AROMATIC_COLOR.filled())),
            )
            .map_err(plot_err)?
            .label("Aromatic Residues")
            .legend(|(x, y)| Circle::new((x + 5, y), 3, AROMATIC_COLOR.filled()));

        let charge: Vec<(f64, f64)> = net_charge_profile(&entry.aa, CHARGE_WINDOW)
            .into_iter()
            .map(|(pos, net)| (pos as f64, net * CHARGE_SCALE + CHARGE_BASELINE))
            .collect();
        if !charge.is_empty() {
            let x_max = entry.scores.len().max(1) as f64;
            chart
                .draw_series(DashedLineSeries::new(
                    [(0.0, CHARGE_BASELINE), (x_max, CHARGE_BASELINE)],
                    4,
                    4,
                    BLACK.mix(0.3).stroke_width(1),
                ))
                .map_err(plot_err)?;
            chart
                .draw_series(LineSeries::new(charge, CHARGE_COLOR.stroke_width(1)))
                .map_err(plot_err)?
                .label("Net Charge per 10-Residue Window")
                .legend(|(x, y)| {
                    PathElement::new(vec![(x, y), (x + 10, y)], CHARGE_COLOR.stroke_width(1))
                });
        }

        if i == 0 {
            chart
                .configure_series_labels()
                .background_style(&WHITE.mix(0.8))
                .border_style(&BLACK)
                .draw()
                .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)
}
