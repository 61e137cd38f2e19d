//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                  |
//! |----------------|--------------------|------------------------------|
//! | `hardware`     | SensorPort         | Simulated gauge + camera     |
//! |                | ActuatorPort       | Barrier, pumps, signage      |
//! | `log_sink`     | EventSink          | Console via `log`            |
//! | `time`         | Pacer              | `std::thread::sleep` / no-op |
//! | `config_file`  | ConfigPort         | JSON file on disk            |

pub mod config_file;
pub mod hardware;
pub mod log_sink;
pub mod time;
