//! Native module compilation.
//!
//! Always rebuilds all four units, whether or not outputs exist, so the
//! binaries track the sources on disk. Compiler outcomes are not checked.

use crate::config::layout::MODULES_DIR;
use crate::config::{Layout, SetupConfig};
use crate::shell::Invocation;

use super::executor::{Stage, StageContext, StageReport};

/// Flags passed to every compiler invocation.
pub const CFLAGS: [&str; 5] = ["-Wall", "-Wextra", "-O2", "-g", "-std=c99"];

/// Extra flags for dynamically loadable modules.
pub const SHARED_FLAGS: [&str; 2] = ["-shared", "-fPIC"];

/// Printed once all four invocations have returned.
pub const COMPILED_MSG: &str = "Native modules compiled";

/// What a unit compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    /// A standalone program.
    Executable,
    /// A position-independent shared object loaded at runtime.
    SharedModule,
}

/// One C source file and its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeUnit {
    /// Source file name inside `modules/`.
    pub source: &'static str,
    /// Output file name inside `modules/`.
    pub output: &'static str,
    /// Output kind.
    pub kind: UnitKind,
}

/// The units, in compilation order.
pub const NATIVE_UNITS: [NativeUnit; 4] = [
    NativeUnit {
        source: "chain_score_filter.c",
        output: "chain_score_filter",
        kind: UnitKind::Executable,
    },
    NativeUnit {
        source: "chain_coords_converter_slib.c",
        output: "chain_coords_converter_slib.so",
        kind: UnitKind::SharedModule,
    },
    NativeUnit {
        source: "extract_subchain_slib.c",
        output: "extract_subchain_slib.so",
        kind: UnitKind::SharedModule,
    },
    NativeUnit {
        source: "chain_filter_by_id.c",
        output: "chain_filter_by_id",
        kind: UnitKind::Executable,
    },
];

impl NativeUnit {
    /// Output path relative to the root.
    pub fn output_path(&self) -> String {
        format!("{}/{}", MODULES_DIR, self.output)
    }

    /// Source path relative to the root.
    pub fn source_path(&self) -> String {
        format!("{}/{}", MODULES_DIR, self.source)
    }

    /// The compiler invocation for this unit, run from the root.
    pub fn invocation(&self, layout: &Layout, config: &SetupConfig) -> Invocation {
        let mut inv = Invocation::new(&config.cc, layout.root())
            .args(CFLAGS)
            .args(["-o".to_string(), self.output_path()]);
        if self.kind == UnitKind::SharedModule {
            inv = inv.args(SHARED_FLAGS);
        }
        inv.arg(self.source_path())
    }
}

/// Compile every native unit.
pub fn run(ctx: &mut StageContext<'_>) -> StageReport {
    let mut report = StageReport::ran(Stage::NativeModules);

    for unit in &NATIVE_UNITS {
        let invocation = unit.invocation(ctx.layout, ctx.config);
        let outcome = ctx.run(&invocation);
        // Compiler diagnostics are already on the terminal.
        outcome.ignore(&invocation);
        report.record(invocation, outcome);
    }

    ctx.ui.success(COMPILED_MSG);
    report
}
