mod config_directory_stub;
mod key_pair_service_stub;
mod machine_types_stub;

pub use self::config_directory_stub::FailingConfigDirectory;
pub use self::key_pair_service_stub::FakeKeyPairService;
pub use self::machine_types_stub::{FakeDeviceNames, FakeMachineTypes};
