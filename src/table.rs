// Copyright 2026 the mos65xx developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::core::Cpu;
use crate::Flavor;

use self::Mode::*;

/// Operand-fetch policy of an instruction; determines its byte length
/// for disassembly. Cycles are a byproduct of the accesses an
/// instruction performs, not of the mode tag.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    AbsoluteIndirectX,
    IndirectX,
    IndirectY,
    ZeroPageIndirect,
    Relative,
    ZeroPageRelative,
}

impl Mode {
    pub fn size(self) -> u8 {
        match self {
            Implied | Accumulator => 1,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | IndirectX
            | IndirectY | ZeroPageIndirect | Relative => 2,
            Absolute | AbsoluteX | AbsoluteY | Indirect
            | AbsoluteIndirectX | ZeroPageRelative => 3,
        }
    }
}

/// Static description of one dispatch-table entry.
#[derive(Copy, Clone, Debug)]
pub struct OpInfo {
    pub mnemonic: &'static str,
    pub mode: Mode,
    pub size: u8,
}

#[derive(Copy, Clone)]
pub(crate) struct Instruction {
    pub name: &'static str,
    pub mode: Mode,
    pub exec: fn(&mut Cpu),
}

pub(crate) const fn op(
    code: u8,
    name: &'static str,
    mode: Mode,
    exec: fn(&mut Cpu),
) -> (u8, Instruction) {
    (code, Instruction { name, mode, exec })
}

// Unassigned CMOS opcodes execute as one-byte, one-cycle NOPs.
const NOP1: Instruction = Instruction {
    name: "NOP",
    mode: Implied,
    exec: |_| {},
};

fn overlay(
    table: &mut [Option<Instruction>; 256],
    ops: &[(u8, Instruction)],
) {
    for &(code, inst) in ops {
        table[code as usize] = Some(inst);
    }
}

/// Composes the dispatch table for `flavor`. An NMOS table with any
/// slot left unset is a construction-time bug and panics.
pub(crate) fn build(flavor: Flavor) -> [Instruction; 256] {
    let mut table: [Option<Instruction>; 256] = [None; 256];
    overlay(&mut table, OPS_6502);
    match flavor {
        Flavor::Nmos6502 => {
            overlay(&mut table, crate::nmos::OPS_NMOS_6502);
        }
        Flavor::Rockwell65C02 => {
            overlay(&mut table, crate::cmos::OPS_65C02);
            overlay(&mut table, crate::cmos::OPS_BITS_65C02);
        }
        Flavor::Wdc65C02 => {
            overlay(&mut table, crate::cmos::OPS_65C02);
            overlay(&mut table, crate::cmos::OPS_BITS_65C02);
            overlay(&mut table, crate::cmos::OPS_WDC_65C02);
        }
    }

    let mut out = [NOP1; 256];
    for (code, slot) in table.iter().enumerate() {
        match slot {
            Some(inst) => out[code] = *inst,
            None if flavor == Flavor::Nmos6502 => {
                panic!("6502 dispatch table has no entry for {:02x}", code)
            }
            None => {}
        }
    }
    out
}

// The 151 documented opcodes, shared by every flavor. Where NMOS and
// CMOS silicon disagree on phantom accesses or decimal behavior, the
// primitives branch on flavor; opcodes whose shape itself differs are
// overlaid by the CMOS table.
pub(crate) static OPS_6502: &[(u8, Instruction)] = &[
    op(0x00, "BRK", Implied, |c| c.brk()),
    op(0x01, "ORA", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x05, "ORA", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x06, "ASL", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::ASL);
    }),
    op(0x08, "PHP", Implied, |c| c.php()),
    op(0x09, "ORA", Immediate, |c| {
        let v = c.immediate();
        c.ORA(v);
    }),
    op(0x0a, "ASL", Accumulator, |c| {
        c.implicit();
        c.a = c.ASL(c.a);
    }),
    op(0x0d, "ORA", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x0e, "ASL", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::ASL);
    }),
    op(0x10, "BPL", Relative, |c| {
        let taken = !c.flags.n();
        c.branch(taken);
    }),
    op(0x11, "ORA", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x15, "ORA", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x16, "ASL", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::ASL);
    }),
    op(0x18, "CLC", Implied, |c| {
        c.implicit();
        c.flags.set_c(false);
    }),
    op(0x19, "ORA", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x1d, "ORA", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x1e, "ASL", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::ASL);
    }),
    op(0x20, "JSR", Absolute, |c| c.jsr()),
    op(0x21, "AND", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x24, "BIT", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.BIT(v);
    }),
    op(0x25, "AND", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x26, "ROL", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::ROL);
    }),
    op(0x28, "PLP", Implied, |c| c.plp()),
    op(0x29, "AND", Immediate, |c| {
        let v = c.immediate();
        c.AND(v);
    }),
    op(0x2a, "ROL", Accumulator, |c| {
        c.implicit();
        c.a = c.ROL(c.a);
    }),
    op(0x2c, "BIT", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.BIT(v);
    }),
    op(0x2d, "AND", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x2e, "ROL", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::ROL);
    }),
    op(0x30, "BMI", Relative, |c| {
        let taken = c.flags.n();
        c.branch(taken);
    }),
    op(0x31, "AND", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x35, "AND", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x36, "ROL", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::ROL);
    }),
    op(0x38, "SEC", Implied, |c| {
        c.implicit();
        c.flags.set_c(true);
    }),
    op(0x39, "AND", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x3d, "AND", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x3e, "ROL", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::ROL);
    }),
    op(0x40, "RTI", Implied, |c| c.rti()),
    op(0x41, "EOR", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x45, "EOR", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x46, "LSR", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::LSR);
    }),
    op(0x48, "PHA", Implied, |c| {
        let a = c.a;
        c.push_op(a);
    }),
    op(0x49, "EOR", Immediate, |c| {
        let v = c.immediate();
        c.EOR(v);
    }),
    op(0x4a, "LSR", Accumulator, |c| {
        c.implicit();
        c.a = c.LSR(c.a);
    }),
    op(0x4c, "JMP", Absolute, |c| {
        c.pc = c.addr_abs();
    }),
    op(0x4d, "EOR", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x4e, "LSR", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::LSR);
    }),
    op(0x50, "BVC", Relative, |c| {
        let taken = !c.flags.v();
        c.branch(taken);
    }),
    op(0x51, "EOR", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x55, "EOR", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x56, "LSR", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::LSR);
    }),
    op(0x58, "CLI", Implied, |c| {
        c.implicit();
        c.flags.i = false;
    }),
    op(0x59, "EOR", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x5d, "EOR", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x5e, "LSR", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::LSR);
    }),
    op(0x60, "RTS", Implied, |c| c.rts()),
    op(0x61, "ADC", IndirectX, |c| {
        let ea = c.addr_izx();
        c.adc_addr(ea);
    }),
    op(0x65, "ADC", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.adc_addr(ea);
    }),
    op(0x66, "ROR", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::ROR);
    }),
    op(0x68, "PLA", Implied, |c| {
        let v = c.pull_op();
        c.LDA(v);
    }),
    op(0x69, "ADC", Immediate, |c| c.adc_imm()),
    op(0x6a, "ROR", Accumulator, |c| {
        c.implicit();
        c.a = c.ROR(c.a);
    }),
    op(0x6c, "JMP", Indirect, |c| c.jmp_indirect()),
    op(0x6d, "ADC", Absolute, |c| {
        let ea = c.addr_abs();
        c.adc_addr(ea);
    }),
    op(0x6e, "ROR", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::ROR);
    }),
    op(0x70, "BVS", Relative, |c| {
        let taken = c.flags.v();
        c.branch(taken);
    }),
    op(0x71, "ADC", IndirectY, |c| {
        let ea = c.addr_izy(false);
        c.adc_addr(ea);
    }),
    op(0x75, "ADC", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.adc_addr(ea);
    }),
    op(0x76, "ROR", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::ROR);
    }),
    op(0x78, "SEI", Implied, |c| {
        c.implicit();
        c.flags.i = true;
    }),
    op(0x79, "ADC", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        c.adc_addr(ea);
    }),
    op(0x7d, "ADC", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.adc_addr(ea);
    }),
    op(0x7e, "ROR", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::ROR);
    }),
    op(0x81, "STA", IndirectX, |c| {
        let ea = c.addr_izx();
        c.bus_write(ea, c.a);
    }),
    op(0x84, "STY", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_write(ea, c.y);
    }),
    op(0x85, "STA", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_write(ea, c.a);
    }),
    op(0x86, "STX", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_write(ea, c.x);
    }),
    op(0x88, "DEY", Implied, |c| {
        c.implicit();
        c.y = c.DEC(c.y);
    }),
    op(0x8a, "TXA", Implied, |c| {
        c.implicit();
        let v = c.x;
        c.LDA(v);
    }),
    op(0x8c, "STY", Absolute, |c| {
        let ea = c.addr_abs();
        c.bus_write(ea, c.y);
    }),
    op(0x8d, "STA", Absolute, |c| {
        let ea = c.addr_abs();
        c.bus_write(ea, c.a);
    }),
    op(0x8e, "STX", Absolute, |c| {
        let ea = c.addr_abs();
        c.bus_write(ea, c.x);
    }),
    op(0x90, "BCC", Relative, |c| {
        let taken = !c.flags.c();
        c.branch(taken);
    }),
    op(0x91, "STA", IndirectY, |c| {
        let ea = c.addr_izy(true);
        c.bus_write(ea, c.a);
    }),
    op(0x94, "STY", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_write(ea, c.y);
    }),
    op(0x95, "STA", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_write(ea, c.a);
    }),
    op(0x96, "STX", ZeroPageY, |c| {
        let ea = c.addr_zpi(c.y);
        c.bus_write(ea, c.x);
    }),
    op(0x98, "TYA", Implied, |c| {
        c.implicit();
        let v = c.y;
        c.LDA(v);
    }),
    op(0x99, "STA", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        c.bus_write(ea, c.a);
    }),
    op(0x9a, "TXS", Implied, |c| {
        c.implicit();
        c.sp = c.x;
    }),
    op(0x9d, "STA", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.bus_write(ea, c.a);
    }),
    op(0xa0, "LDY", Immediate, |c| {
        let v = c.immediate();
        c.LDY(v);
    }),
    op(0xa1, "LDA", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xa2, "LDX", Immediate, |c| {
        let v = c.immediate();
        c.LDX(v);
    }),
    op(0xa4, "LDY", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.LDY(v);
    }),
    op(0xa5, "LDA", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xa6, "LDX", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.LDX(v);
    }),
    op(0xa8, "TAY", Implied, |c| {
        c.implicit();
        let v = c.a;
        c.LDY(v);
    }),
    op(0xa9, "LDA", Immediate, |c| {
        let v = c.immediate();
        c.LDA(v);
    }),
    op(0xaa, "TAX", Implied, |c| {
        c.implicit();
        let v = c.a;
        c.LDX(v);
    }),
    op(0xac, "LDY", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.LDY(v);
    }),
    op(0xad, "LDA", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xae, "LDX", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.LDX(v);
    }),
    op(0xb0, "BCS", Relative, |c| {
        let taken = c.flags.c();
        c.branch(taken);
    }),
    op(0xb1, "LDA", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xb4, "LDY", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.LDY(v);
    }),
    op(0xb5, "LDA", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xb6, "LDX", ZeroPageY, |c| {
        let ea = c.addr_zpi(c.y);
        let v = c.bus_read(ea);
        c.LDX(v);
    }),
    op(0xb8, "CLV", Implied, |c| {
        c.implicit();
        c.flags.set_v(false);
    }),
    op(0xb9, "LDA", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xba, "TSX", Implied, |c| {
        c.implicit();
        let v = c.sp;
        c.LDX(v);
    }),
    op(0xbc, "LDY", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.LDY(v);
    }),
    op(0xbd, "LDA", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xbe, "LDX", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.LDX(v);
    }),
    op(0xc0, "CPY", Immediate, |c| {
        let v = c.immediate();
        c.CMP(c.y, v);
    }),
    op(0xc1, "CMP", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xc4, "CPY", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.CMP(c.y, v);
    }),
    op(0xc5, "CMP", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xc6, "DEC", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::DEC);
    }),
    op(0xc8, "INY", Implied, |c| {
        c.implicit();
        c.y = c.INC(c.y);
    }),
    op(0xc9, "CMP", Immediate, |c| {
        let v = c.immediate();
        c.CMP(c.a, v);
    }),
    op(0xca, "DEX", Implied, |c| {
        c.implicit();
        c.x = c.DEC(c.x);
    }),
    op(0xcc, "CPY", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.CMP(c.y, v);
    }),
    op(0xcd, "CMP", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xce, "DEC", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::DEC);
    }),
    op(0xd0, "BNE", Relative, |c| {
        let taken = !c.flags.z();
        c.branch(taken);
    }),
    op(0xd1, "CMP", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xd5, "CMP", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xd6, "DEC", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::DEC);
    }),
    op(0xd8, "CLD", Implied, |c| {
        c.implicit();
        c.flags.d = false;
    }),
    op(0xd9, "CMP", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xdd, "CMP", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xde, "DEC", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::DEC);
    }),
    op(0xe0, "CPX", Immediate, |c| {
        let v = c.immediate();
        c.CMP(c.x, v);
    }),
    op(0xe1, "SBC", IndirectX, |c| {
        let ea = c.addr_izx();
        c.sbc_addr(ea);
    }),
    op(0xe4, "CPX", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.CMP(c.x, v);
    }),
    op(0xe5, "SBC", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.sbc_addr(ea);
    }),
    op(0xe6, "INC", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::INC);
    }),
    op(0xe8, "INX", Implied, |c| {
        c.implicit();
        c.x = c.INC(c.x);
    }),
    op(0xe9, "SBC", Immediate, |c| c.sbc_imm()),
    op(0xea, "NOP", Implied, |c| c.implicit()),
    op(0xec, "CPX", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.CMP(c.x, v);
    }),
    op(0xed, "SBC", Absolute, |c| {
        let ea = c.addr_abs();
        c.sbc_addr(ea);
    }),
    op(0xee, "INC", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::INC);
    }),
    op(0xf0, "BEQ", Relative, |c| {
        let taken = c.flags.z();
        c.branch(taken);
    }),
    op(0xf1, "SBC", IndirectY, |c| {
        let ea = c.addr_izy(false);
        c.sbc_addr(ea);
    }),
    op(0xf5, "SBC", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.sbc_addr(ea);
    }),
    op(0xf6, "INC", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.rmw(ea, Cpu::INC);
    }),
    op(0xf8, "SED", Implied, |c| {
        c.implicit();
        c.flags.d = true;
    }),
    op(0xf9, "SBC", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        c.sbc_addr(ea);
    }),
    op(0xfd, "SBC", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.sbc_addr(ea);
    }),
    op(0xfe, "INC", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.rmw(ea, Cpu::INC);
    }),
];
