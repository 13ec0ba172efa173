//! Unit converters for length, weight, temperature and data size.

use serde::{Deserialize, Serialize};

use crate::tools::{ToolError, ToolResult, format_number};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Length,
    Weight,
    Temperature,
    DataSize,
}

/// A convertible unit. `factor` is the size of one unit in the dimension's
/// base unit (metre, gram, byte); temperatures are handled separately.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Unit {
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(skip)]
    factor: f64,
}

const fn unit(symbol: &'static str, name: &'static str, factor: f64) -> Unit {
    Unit {
        symbol,
        name,
        factor,
    }
}

const LENGTH_UNITS: &[Unit] = &[
    unit("mm", "Millimetre", 0.001),
    unit("cm", "Centimetre", 0.01),
    unit("m", "Metre", 1.0),
    unit("km", "Kilometre", 1000.0),
    unit("in", "Inch", 0.0254),
    unit("ft", "Foot", 0.3048),
    unit("yd", "Yard", 0.9144),
    unit("mi", "Mile", 1609.344),
    unit("nmi", "Nautical mile", 1852.0),
];

const WEIGHT_UNITS: &[Unit] = &[
    unit("mg", "Milligram", 0.001),
    unit("g", "Gram", 1.0),
    unit("kg", "Kilogram", 1000.0),
    unit("t", "Tonne", 1_000_000.0),
    unit("oz", "Ounce", 28.349523125),
    unit("lb", "Pound", 453.59237),
    unit("st", "Stone", 6350.29318),
];

const TEMPERATURE_UNITS: &[Unit] = &[
    unit("c", "Celsius", 1.0),
    unit("f", "Fahrenheit", 1.0),
    unit("k", "Kelvin", 1.0),
];

const DATA_SIZE_UNITS: &[Unit] = &[
    unit("bit", "Bit", 0.125),
    unit("b", "Byte", 1.0),
    unit("kb", "Kilobyte", 1e3),
    unit("mb", "Megabyte", 1e6),
    unit("gb", "Gigabyte", 1e9),
    unit("tb", "Terabyte", 1e12),
    unit("kib", "Kibibyte", 1024.0),
    unit("mib", "Mebibyte", 1_048_576.0),
    unit("gib", "Gibibyte", 1_073_741_824.0),
    unit("tib", "Tebibyte", 1_099_511_627_776.0),
];

impl Dimension {
    pub fn units(self) -> &'static [Unit] {
        match self {
            Dimension::Length => LENGTH_UNITS,
            Dimension::Weight => WEIGHT_UNITS,
            Dimension::Temperature => TEMPERATURE_UNITS,
            Dimension::DataSize => DATA_SIZE_UNITS,
        }
    }

    pub fn find(self, symbol: &str) -> Option<Unit> {
        let symbol = symbol.trim();
        self.units()
            .iter()
            .copied()
            .find(|unit| unit.symbol.eq_ignore_ascii_case(symbol))
    }
}

pub fn convert(dimension: Dimension, value: &str, from: &str, to: &str) -> ToolResult {
    let value: f64 = value.trim().parse().map_err(|_| ToolError::InvalidInput)?;
    if !value.is_finite() {
        return Err(ToolError::InvalidInput);
    }
    let from = dimension.find(from).ok_or(ToolError::InvalidInput)?;
    let to = dimension.find(to).ok_or(ToolError::InvalidInput)?;

    let result = match dimension {
        Dimension::Temperature => from_celsius(to_celsius(value, from.symbol), to.symbol),
        _ => value * from.factor / to.factor,
    };

    Ok(format_number(result))
}

fn to_celsius(value: f64, symbol: &str) -> f64 {
    match symbol {
        "f" => (value - 32.0) * 5.0 / 9.0,
        "k" => value - 273.15,
        _ => value,
    }
}

fn from_celsius(value: f64, symbol: &str) -> f64 {
    match symbol {
        "f" => value * 9.0 / 5.0 + 32.0,
        "k" => value + 273.15,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_length() {
        assert_eq!(convert(Dimension::Length, "1", "mi", "km").unwrap(), "1.609344");
        assert_eq!(convert(Dimension::Length, "12", "in", "ft").unwrap(), "1");
    }

    #[test]
    fn converts_weight() {
        assert_eq!(convert(Dimension::Weight, "1", "kg", "g").unwrap(), "1000");
        assert_eq!(convert(Dimension::Weight, "16", "oz", "lb").unwrap(), "1");
    }

    #[test]
    fn converts_temperature() {
        assert_eq!(convert(Dimension::Temperature, "100", "C", "F").unwrap(), "212");
        assert_eq!(convert(Dimension::Temperature, "0", "k", "c").unwrap(), "-273.15");
        assert_eq!(convert(Dimension::Temperature, "32", "f", "k").unwrap(), "273.15");
    }

    #[test]
    fn converts_data_size() {
        assert_eq!(convert(Dimension::DataSize, "1", "MiB", "KiB").unwrap(), "1024");
        assert_eq!(convert(Dimension::DataSize, "8", "bit", "B").unwrap(), "1");
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(
            convert(Dimension::Length, "ten", "m", "km"),
            Err(ToolError::InvalidInput)
        );
        assert_eq!(
            convert(Dimension::Length, "1", "kg", "km"),
            Err(ToolError::InvalidInput)
        );
        assert_eq!(
            convert(Dimension::Length, "inf", "m", "km"),
            Err(ToolError::InvalidInput)
        );
    }
}
