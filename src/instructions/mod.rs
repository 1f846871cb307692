//! # 8080 Instruction Implementations
//!
//! This module contains the implementations of all 8080 instructions, organized by
//! category. Dispatch is driven entirely by the [`Operation`] stored in the opcode
//! table; no module here looks at raw opcode bits.
//!
//! Before an executor runs, the engine has already advanced PC past the instruction
//! and will charge `base_cycles` afterwards. Executors only set PC when they
//! transfer control, and only add cycles for a taken conditional CALL/RET.
//!
//! ## Categories
//!
//! - **alu**: Accumulator arithmetic and logic (ADD..CMP, immediates, DAA, CMA, DAD)
//! - **branches**: Jumps (JMP, Jcc, PCHL)
//! - **control**: Calls, returns, restarts, HLT, NOP
//! - **flags**: Carry and interrupt latch manipulation (STC, CMC, EI, DI)
//! - **inc_dec**: INR, DCR, INX, DCX
//! - **io**: IN, OUT
//! - **load_store**: MVI, LXI, LDA, STA, LHLD, SHLD, LDAX, STAX
//! - **shifts**: Accumulator rotates (RLC, RRC, RAL, RAR)
//! - **stack**: PUSH, POP, XTHL, SPHL
//! - **transfer**: Register transfers (MOV, XCHG)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod io;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::decoder::Instruction;
use crate::opcodes::Operation;
use crate::{Bus, Cpu, ExecutionError};

/// Executes a decoded instruction against the CPU.
pub(crate) fn execute<B: Bus>(cpu: &mut Cpu<B>, instr: &Instruction) -> Result<(), ExecutionError> {
    match instr.operation {
        Operation::Nop => Ok(()),
        Operation::Hlt => control::execute_hlt(cpu),

        Operation::Mov(dst, src) => transfer::execute_mov(cpu, dst, src),
        Operation::Xchg => transfer::execute_xchg(cpu),

        Operation::Mvi(reg) => load_store::execute_mvi(cpu, reg, instr.imm8()),
        Operation::Lxi(pair) => load_store::execute_lxi(cpu, pair, instr.imm16()),
        Operation::Lda => load_store::execute_lda(cpu, instr.imm16()),
        Operation::Sta => load_store::execute_sta(cpu, instr.imm16()),
        Operation::Lhld => load_store::execute_lhld(cpu, instr.imm16()),
        Operation::Shld => load_store::execute_shld(cpu, instr.imm16()),
        Operation::Ldax(pair) => load_store::execute_ldax(cpu, pair),
        Operation::Stax(pair) => load_store::execute_stax(cpu, pair),

        Operation::Alu(op, reg) => {
            let value = cpu.read_reg(reg)?;
            alu::execute_alu(cpu, op, value);
            Ok(())
        }
        Operation::AluImm(op) => {
            alu::execute_alu(cpu, op, instr.imm8());
            Ok(())
        }
        Operation::Daa => alu::execute_daa(cpu),
        Operation::Cma => alu::execute_cma(cpu),
        Operation::Dad(pair) => alu::execute_dad(cpu, pair),

        Operation::Inr(reg) => inc_dec::execute_inr(cpu, reg),
        Operation::Dcr(reg) => inc_dec::execute_dcr(cpu, reg),
        Operation::Inx(pair) => inc_dec::execute_inx(cpu, pair),
        Operation::Dcx(pair) => inc_dec::execute_dcx(cpu, pair),

        Operation::Rlc => shifts::execute_rlc(cpu),
        Operation::Rrc => shifts::execute_rrc(cpu),
        Operation::Ral => shifts::execute_ral(cpu),
        Operation::Rar => shifts::execute_rar(cpu),

        Operation::Stc => flags::execute_stc(cpu),
        Operation::Cmc => flags::execute_cmc(cpu),
        Operation::Ei => flags::execute_ei(cpu),
        Operation::Di => flags::execute_di(cpu),

        Operation::Jmp => branches::execute_jmp(cpu, instr.imm16()),
        Operation::JmpIf(condition) => branches::execute_jmp_if(cpu, condition, instr.imm16()),
        Operation::Pchl => branches::execute_pchl(cpu),

        Operation::Call => control::execute_call(cpu, instr.imm16()),
        Operation::CallIf(condition) => control::execute_call_if(cpu, condition, instr),
        Operation::Ret => control::execute_ret(cpu),
        Operation::RetIf(condition) => control::execute_ret_if(cpu, condition, instr),
        Operation::Rst(n) => control::execute_rst(cpu, n),

        Operation::Push(pair) => stack::execute_push(cpu, pair),
        Operation::Pop(pair) => stack::execute_pop(cpu, pair),
        Operation::Xthl => stack::execute_xthl(cpu),
        Operation::Sphl => stack::execute_sphl(cpu),

        Operation::In => io::execute_in(cpu, instr.imm8()),
        Operation::Out => io::execute_out(cpu, instr.imm8()),
    }
}
