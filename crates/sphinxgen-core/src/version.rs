//! Sphinx API protocol version constants.
//!
//! The searchd wire protocol is versioned by release; some source features
//! are gated on the negotiated version. Sphinxgen only needs the search
//! command versions here.

/// Search command version spoken by Sphinx 0.9.7.
pub const VER_SPHINX_0_9_7: u32 = 0x107;

/// Search command version spoken by Sphinx 0.9.8.
pub const VER_SPHINX_0_9_8: u32 = 0x113;

/// Search command version spoken by Sphinx 0.9.9.
pub const VER_SPHINX_0_9_9: u32 = 0x116;

/// Minimum version with float attribute support.
///
/// Float and decimal columns are only indexable against daemons at or
/// above this version; older daemons drop them entirely.
pub const VER_FLOAT_ATTRS: u32 = VER_SPHINX_0_9_8;
