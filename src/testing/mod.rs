pub mod ports;

#[allow(unused_imports)]
pub use ports::FailingConfigDirectory;
#[allow(unused_imports)]
pub use ports::FakeDeviceNames;
#[allow(unused_imports)]
pub use ports::FakeKeyPairService;
#[allow(unused_imports)]
pub use ports::FakeMachineTypes;
