//! Fixed literal markers of the upstream trainer's log format.
//!
//! The exact texts are a contract with the external log producer and are
//! not configurable at runtime; they appear verbatim in every log this
//! crate is expected to ingest.

/// Precedes the training-cycle count.
pub const TRAINING_CYCLES: &str = "Циклов обучения: ";

/// Opens the synapse-weight initialization section.
pub const INIT_SECTION_START: &str = "Инициализация весов синапсов";

/// Ends the initialization section (the marker itself is excluded).
pub const INIT_SECTION_END: &str = "Выбираем допустимый образ";

/// Opens a per-neuron header of the form `Нейрон[layer][index]`.
pub const NEURON_HEADER: &str = "Нейрон[";

/// Opens a synapse-weight assignment of the form `w[...] = value`.
pub const WEIGHT_ASSIGN: &str = "w[";

/// Precedes a neuron's pre-activation weighted sum.
pub const WEIGHTED_SUM: &str = "Взвешенная сумма = ";

/// Precedes one network input signal.
pub const INPUT_SIGNAL: &str = "Аксон = ";
