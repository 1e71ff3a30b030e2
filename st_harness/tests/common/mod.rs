//! Shared setup for the emulator-backed checks.

use st_harness::Harness;

/// Build a harness from the environment and make sure the emulator answers.
pub async fn harness() -> Harness {
    let harness = Harness::from_env()
        .await
        .expect("Failed to build harness");

    assert!(
        harness.is_available().await,
        "Emulator is not reachable at {}",
        harness.emulator().endpoint()
    );

    harness
}
