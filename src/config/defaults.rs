use crate::flavor::Flavor;

/// Flavor assumed when neither file, environment, nor CLI names one
impl Default for Flavor {
    fn default() -> Self {
        Flavor::mysql(8, 0, 0)
    }
}

// Objects and lint overrides default to empty: every table is managed and
// every rule runs at its own default severity.
