use std::fmt;
use std::str::FromStr;

/// Which per-cell table an analysis prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layer {
    /// The map itself, with the largest square drawn in the full marker.
    #[default]
    Map,
    /// Consecutive empty cells from each cell downward, itself included.
    Runs,
    /// Side of the largest empty square whose upper-left corner is each cell.
    Sizes,
}

impl FromStr for Layer {
    type Err = String;

    /// Parses a layer name (case-insensitive): "map", "runs" or "sizes".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "map" => Ok(Layer::Map),
            "runs" => Ok(Layer::Runs),
            "sizes" => Ok(Layer::Sizes),
            _ => Err(format!("invalid layer: {s} (expected map, runs or sizes)")),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layer::Map => "map",
            Layer::Runs => "runs",
            Layer::Sizes => "sizes",
        };
        f.write_str(name)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Layer::from_str("map"), Ok(Layer::Map));
        assert_eq!(Layer::from_str("RUNS"), Ok(Layer::Runs));
        assert_eq!(Layer::from_str("Sizes"), Ok(Layer::Sizes));
        assert!(Layer::from_str("chars").is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for layer in [Layer::Map, Layer::Runs, Layer::Sizes] {
            assert_eq!(layer.to_string().parse::<Layer>(), Ok(layer));
        }
    }
}
