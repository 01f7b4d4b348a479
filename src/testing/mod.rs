pub mod ports;

#[allow(unused_imports)]
pub use ports::FakeProcessRunner;
#[allow(unused_imports)]
pub use ports::MockWorkspaceFs;
#[allow(unused_imports)]
pub use ports::RecordedRun;
