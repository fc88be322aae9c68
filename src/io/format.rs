use crate::physics::units::{au_to_km, au_to_lunar_distances, joules_to_megatons};

/// Display unit for distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DistanceUnit {
    #[default]
    Au,
    Km,
    Ld,
}

pub fn format_distance(au: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::Au => format!("{:.4} AU", au),
        DistanceUnit::Km => format!("{:.1} km", au_to_km(au)),
        DistanceUnit::Ld => format!("{:.2} LD", au_to_lunar_distances(au)),
    }
}

/// Impact energy as TNT equivalent.
pub fn format_energy(joules: f64) -> String {
    let mt = joules_to_megatons(joules);
    if mt >= 1.0 {
        format!("{:.2} Mt", mt)
    } else if mt >= 1e-3 {
        format!("{:.2} kt", mt * 1e3)
    } else {
        format!("{:.3e} J", joules)
    }
}

pub fn format_probability(p: f64) -> String {
    if p >= 1e-3 {
        format!("{:.2}%", p * 100.0)
    } else {
        format!("{:.2e}", p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_au_in_each_unit() {
        assert_eq!(format_distance(1.0, DistanceUnit::Km), "149597870.7 km");
        assert_eq!(format_distance(1.0, DistanceUnit::Ld), "389.17 LD");
        assert_eq!(format_distance(1.0, DistanceUnit::Au), "1.0000 AU");
    }

    #[test]
    fn energy_scales() {
        assert_eq!(format_energy(4.184e15), "1.00 Mt");
        assert_eq!(format_energy(4.184e13), "10.00 kt");
        assert_eq!(format_energy(1.0e6), "1.000e6 J");
    }

    #[test]
    fn probability_styles() {
        assert_eq!(format_probability(0.5), "50.00%");
        assert_eq!(format_probability(2.5e-5), "2.50e-5");
    }
}
