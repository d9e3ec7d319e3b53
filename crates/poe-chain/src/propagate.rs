//! Single-pass propagation of power from the switch down the chain.

use crate::device::device_pass_through_output;
use crate::loss::segment_loss;
use crate::model::{ChainConfig, LinkInput, ResolvedLink};
use crate::stage::{MarginNote, Stage};
use poe_core::{Real, m, w};
use uom::si::power::watt;

/// Below this many watts a margin or forwarded output is considered exhausted.
pub const MARGIN_THRESHOLD_W: Real = 1.0;

/// Propagate `switch_output_w` through `links` in order.
///
/// Returns `links.len() + 1` stages, the source first. Each device's output
/// is the next device's input; no look-ahead is done and every margin note is
/// a local judgement on its own stage.
pub fn propagate_chain(
    switch_output_w: Real,
    links: &[LinkInput],
    config: &ChainConfig,
) -> Vec<Stage> {
    let mut stages = Vec::with_capacity(links.len() + 1);
    stages.push(Stage::source(switch_output_w));

    let loss_multiplier = config.cable_situation.loss_multiplier();
    let mut power_at_stage = switch_output_w;

    for (index, input) in links.iter().enumerate() {
        let link = input.resolve();
        let is_last = index + 1 == links.len();

        let cable_loss_w = segment_loss_w(power_at_stage, &link, config) * loss_multiplier;
        let power_after_cable_w = power_at_stage - cable_loss_w;
        let output_w = device_pass_through_output(
            power_after_cable_w,
            link.device_draw_w,
            link.efficiency_percent,
        );
        let margin_note =
            assess_margin(power_after_cable_w, link.device_draw_w, output_w, is_last);

        let stage = Stage {
            label: Stage::device_label(index + 1),
            power_in_w: Some(power_at_stage),
            cable_loss_w: Some(cable_loss_w),
            power_after_cable_w: Some(power_after_cable_w),
            device_draw_w: Some(link.device_draw_w),
            efficiency_percent: Some(link.efficiency_percent),
            output_w,
            margin_note,
        };
        tracing::debug!(
            label = %stage.label,
            cable = link.cable.key,
            cable_loss_w,
            power_after_cable_w,
            output_w,
            note = ?margin_note,
            "stage"
        );
        stages.push(stage);

        power_at_stage = output_w;
    }

    stages
}

fn segment_loss_w(through_w: Real, link: &ResolvedLink, config: &ChainConfig) -> Real {
    if link.cable_length_m <= 0.0 {
        return 0.0;
    }
    segment_loss(
        w(through_w),
        m(link.cable_length_m),
        link.cable,
        config.pair_mode,
    )
    .get::<watt>()
}

fn assess_margin(
    power_after_cable_w: Real,
    draw_w: Real,
    output_w: Real,
    is_last: bool,
) -> Option<MarginNote> {
    if power_after_cable_w < draw_w {
        Some(MarginNote::Insufficient)
    } else if output_w < MARGIN_THRESHOLD_W && !is_last {
        Some(MarginNote::NoMarginForNext)
    } else if power_after_cable_w - draw_w < MARGIN_THRESHOLD_W {
        Some(MarginNote::Minimal)
    } else {
        None
    }
}
