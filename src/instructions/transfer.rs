//! # Register Transfer Instructions
//!
//! - TAX, TAY, TXA, TYA: copy between A and an index register
//! - TSX: copy SP into X
//! - TXS: copy X into SP
//!
//! Every transfer except TXS sets Z and N from the copied value. All take 2
//! cycles.

use super::invalid_selector;
use crate::cycles::CycleBudget;
use crate::opcodes::{OpcodeMetadata, Operation};
use crate::{Cpu, ExecutionError};

pub(crate) fn execute_transfer(
    cpu: &mut Cpu,
    metadata: &OpcodeMetadata,
    cycles: &mut CycleBudget,
) -> Result<(), ExecutionError> {
    let copied = match metadata.operation {
        Operation::Tax => {
            cpu.x = cpu.a;
            Some(cpu.x)
        }
        Operation::Tay => {
            cpu.y = cpu.a;
            Some(cpu.y)
        }
        Operation::Txa => {
            cpu.a = cpu.x;
            Some(cpu.a)
        }
        Operation::Tya => {
            cpu.a = cpu.y;
            Some(cpu.a)
        }
        Operation::Tsx => {
            cpu.x = cpu.sp;
            Some(cpu.x)
        }
        Operation::Txs => {
            cpu.sp = cpu.x;
            None
        }
        _ => return Err(invalid_selector(metadata, "transfer")),
    };
    cycles.tick();

    if let Some(value) = copied {
        cpu.flags.set_zn(value);
    }
    Ok(())
}
