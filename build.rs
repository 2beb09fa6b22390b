use vergen::{BuildBuilder, Emitter};

// Emits VERGEN_BUILD_TIMESTAMP, logged at startup.
fn main() {
    let Ok(build) = BuildBuilder::all_build() else {
        return;
    };
    if let Ok(emitter) = Emitter::default().add_instructions(&build) {
        let _ = emitter.emit();
    }
}
