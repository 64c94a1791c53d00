use crate::layer::Layer;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Silences every log line. Map output is unaffected.
    pub quiet: bool,
    /// Raises the log level: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub verbose: u8,
    /// The table printed for each successfully analysed map.
    pub layer: Layer,
}
