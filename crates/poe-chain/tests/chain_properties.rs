//! End-to-end checks of the chain engine through its public API.

use poe_chain::{
    CableSituation, ChainConfig, ChainSummary, LinkInput, MarginNote, PairMode, cable_loss,
    cable_type_keys, device_pass_through_output, power_after_cable, propagate_chain,
    summarize_chain,
};
use poe_core::{Tolerances, nearly_equal};

#[test]
fn cable_type_listing_feeds_choice_inputs() {
    let keys: Vec<_> = cable_type_keys().collect();
    for expected in ["Cat5e", "Cat6", "Cat6a", "Cat7"] {
        assert!(keys.contains(&expected), "missing {expected}");
    }
}

#[test]
fn physics_utilities_agree_with_each_other() {
    let loss = cable_loss(90.0, 100.0, "Cat5e", true);
    let after = power_after_cable(90.0, 100.0, "Cat5e", true);
    assert_eq!(after, 90.0 - loss);
    assert_eq!(device_pass_through_output(after, 10.0, 100.0), after - 10.0);
}

#[test]
fn one_device_with_cable() {
    let links = [LinkInput::new(5.0, 90.0).with_cable(50.0, "Cat5e")];
    let config = ChainConfig::new(PairMode::TwoPair, CableSituation::Typical);
    let stages = propagate_chain(30.0, &links, &config);

    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0].label, "Switch (PSE)");
    assert_eq!(stages[1].label, "Device 1");

    let device = &stages[1];
    assert_eq!(device.power_in_w, Some(30.0));
    let loss = device.cable_loss_w.unwrap();
    assert!(loss > 0.0);
    assert!(device.power_after_cable_w.unwrap() <= 30.0);
    assert_eq!(device.device_draw_w, Some(5.0));
    assert_eq!(device.efficiency_percent, Some(90.0));

    let expected_out = (30.0 - loss - 5.0) * 0.9;
    assert!(nearly_equal(device.output_w, expected_out, Tolerances::default()));
}

#[test]
fn one_pair_chain_loses_twice_as_much_on_first_segment() {
    let links = [LinkInput::new(5.0, 90.0).with_cable(60.0, "Cat6a")];
    let two = propagate_chain(60.0, &links, &ChainConfig::default());
    let one = propagate_chain(
        60.0,
        &links,
        &ChainConfig::new(PairMode::OnePair, CableSituation::Typical),
    );
    assert!(nearly_equal(
        one[1].cable_loss_w.unwrap(),
        2.0 * two[1].cable_loss_w.unwrap(),
        Tolerances::default()
    ));
}

#[test]
fn cool_situation_loses_less_than_typical() {
    let links = [LinkInput::new(0.0, 100.0).with_cable(100.0, "Cat5e")];
    let typical = propagate_chain(90.0, &links, &ChainConfig::default());
    let cool = propagate_chain(
        90.0,
        &links,
        &ChainConfig::new(PairMode::TwoPair, CableSituation::Cool),
    );
    assert!(cool[1].cable_loss_w.unwrap() < typical[1].cable_loss_w.unwrap());
}

#[test]
fn long_cascade_runs_out_of_power() {
    let link = LinkInput::new(7.0, 85.0).with_cable(30.0, "Cat5e");
    let links = vec![link; 6];
    let stages = propagate_chain(60.0, &links, &ChainConfig::default());

    let first_short = stages
        .iter()
        .position(|stage| stage.margin_note == Some(MarginNote::Insufficient))
        .expect("six 7 W devices cannot all run from 60 W");
    assert!(first_short > 1);

    // Once a device starves, everything after it gets nothing.
    for stage in &stages[first_short..] {
        assert_eq!(stage.output_w, 0.0);
    }
    assert_eq!(summarize_chain(&stages), ChainSummary::Underpowered { devices: 6 });
}
