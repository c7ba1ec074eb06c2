
/*!
Contains configuration information for representative selection.
Typical usage is to the use the builder to construct the config, e.g.
```
use msa_rep::rep_config::{RepConfig, RepConfigBuilder};
let config: RepConfig = RepConfigBuilder::default()
    .min_len(120)
    .min_len_frac(0.7)
    .build()
    .unwrap();
```
*/

/// The gap symbol used by most alignment tools
pub const DEFAULT_GAP_SYMBOL: u8 = b'-';
/// The consensus symbol for a column without a unique majority
pub const DEFAULT_AMBIGUOUS_SYMBOL: u8 = b'X';

/**
Contains configuration information for representative selection.
Typical usage is to the use the builder to construct the config, e.g.
```
use msa_rep::rep_config::{RepConfig, RepConfigBuilder};
let config: RepConfig = RepConfigBuilder::default()
    .min_len(50)
    .build()
    .unwrap();
assert_eq!(config.min_len_frac, 0.0);
assert_eq!(config.gap_symbol, b'-');
```
*/
#[derive(derive_builder::Builder, Clone, Debug)]
#[builder(default, build_fn(validate = "Self::validate"))]
pub struct RepConfig {
    /// Absolute minimum ungapped length for a sequence to be considered; 0 disables the check
    pub min_len: usize,
    /// Minimum ungapped length as a fraction of the median ungapped length of all inputs; values <= 0.0 disable the check
    pub min_len_frac: f64,
    /// The symbol representing a gap in the alignment
    pub gap_symbol: u8,
    /// The symbol placed in consensus columns that are tied; these columns are ignored during scoring
    pub ambiguous_symbol: u8
}

impl Default for RepConfig {
    fn default() -> Self {
        Self {
            // filtering is opt-in
            min_len: 0,
            min_len_frac: 0.0,
            // standard FASTA alignment symbols
            gap_symbol: DEFAULT_GAP_SYMBOL,
            ambiguous_symbol: DEFAULT_AMBIGUOUS_SYMBOL
        }
    }
}

impl RepConfigBuilder {
    /// Sanity checks the options before building
    fn validate(&self) -> Result<(), String> {
        let gap_symbol = self.gap_symbol.unwrap_or(DEFAULT_GAP_SYMBOL);
        let ambiguous_symbol = self.ambiguous_symbol.unwrap_or(DEFAULT_AMBIGUOUS_SYMBOL);
        if gap_symbol == ambiguous_symbol {
            return Err(format!("gap_symbol and ambiguous_symbol must differ, both are {:?}", gap_symbol as char));
        }

        if self.min_len_frac.map_or(false, |f| f.is_nan()) {
            return Err("min_len_frac must be a number".to_string());
        }
        Ok(())
    }
}
