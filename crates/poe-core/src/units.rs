// poe-core/src/units.rs

use uom::si::f64::{
    ElectricCurrent as UomElectricCurrent, ElectricPotential as UomElectricPotential,
    ElectricalResistance as UomElectricalResistance, Length as UomLength, Power as UomPower,
};

// Public canonical unit types (SI, f64)
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Resistance = UomElectricalResistance;
pub type Length = UomLength;
pub type Power = UomPower;

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn ohms(v: f64) -> Resistance {
    use uom::si::electrical_resistance::ohm;
    Resistance::new::<ohm>(v)
}

pub mod constants {
    use super::*;

    /// Nominal POE supply voltage.
    pub const POE_VOLTAGE_V: f64 = 48.0;

    #[inline]
    pub fn poe_voltage() -> Voltage {
        volts(POE_VOLTAGE_V)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = w(30.0);
        let _l = m(100.0);
        let _v = volts(48.0);
        let _r = ohms(2.99);
        let _v0 = constants::poe_voltage();
    }

    #[test]
    fn power_over_voltage_is_current() {
        let i: Current = w(96.0) / constants::poe_voltage();
        assert!((i.value - 2.0).abs() < 1e-12);
    }

    #[test]
    fn current_squared_times_resistance_is_power() {
        let i: Current = w(96.0) / constants::poe_voltage();
        let p: Power = i * i * ohms(3.0);
        assert!((p.value - 12.0).abs() < 1e-12);
    }
}
