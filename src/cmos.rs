// Copyright 2026 the mos65xx developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The 65C02 overlays: the shared CMOS table, the Rockwell bit
//! extensions (common to the Rockwell and WDC parts), and the WDC-only
//! WAI/STP pair.

use crate::core::Cpu;
use crate::mi::*;
use crate::table::Mode::*;
use crate::table::{op, Instruction};

impl Cpu {
    #[allow(non_snake_case)]
    pub(crate) fn TSB(&mut self, val: Byte) -> Byte {
        self.flags.z = self.a & val;
        self.a | val
    }

    #[allow(non_snake_case)]
    pub(crate) fn TRB(&mut self, val: Byte) -> Byte {
        self.flags.z = self.a & val;
        !self.a & val
    }

    // The CMOS part fixed the page-wrap bug and pays for it with a
    // third read of the operand (the last-latched address).
    pub(crate) fn jmp_indirect_cmos(&mut self) {
        let base = self.addr_abs();
        self.bus_read(self.addr);
        self.pc = self.read_word(base);
    }

    pub(crate) fn jmp_indirect_x(&mut self) {
        let base = self.addr_abs();
        self.bus_read(self.addr);
        let ea = base + self.x;
        self.pc = self.read_word(ea);
    }

    // The eight-cycle 0x5c oddity: one read from the operand low byte
    // under page 0xff, then four reads of 0xffff.
    pub(crate) fn nop_5c(&mut self) {
        let base = Addr::from_bytes(self.addr_abs().lo(), MachineInt(0xff));
        self.bus_read(base);
        self.bus_read(MachineInt(0xffff));
        self.bus_read(MachineInt(0xffff));
        self.bus_read(MachineInt(0xffff));
        self.bus_read(MachineInt(0xffff));
    }

    // BBRn/BBSn: read the zero-page operand (with the R-M-W style dead
    // cycle), then branch on the selected bit.
    pub(crate) fn branch_bit(&mut self, mask: u8, branch_on_set: bool) {
        let zp = self.addr_zp();
        let val = self.bus_read(zp);
        self.bus_read(zp);
        let taken = ((val & mask) != 0) == branch_on_set;
        self.branch(taken);
    }
}

// Opcodes added or reshaped by every 65C02.
pub(crate) static OPS_65C02: &[(u8, Instruction)] = &[
    op(0x02, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0x04, "TSB", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::TSB);
    }),
    op(0x0c, "TSB", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::TSB);
    }),
    op(0x12, "ORA", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        let v = c.bus_read(ea);
        c.ORA(v);
    }),
    op(0x14, "TRB", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, Cpu::TRB);
    }),
    op(0x1a, "INC", Accumulator, |c| {
        c.implicit();
        c.a = c.INC(c.a);
    }),
    op(0x1c, "TRB", Absolute, |c| {
        let ea = c.addr_abs();
        c.rmw(ea, Cpu::TRB);
    }),
    // The CMOS shift on abs,X pays the fixup cycle only on a page
    // cross; INC/DEC abs,X keep the unconditional cycle.
    op(0x1e, "ASL", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.rmw(ea, Cpu::ASL);
    }),
    op(0x22, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0x32, "AND", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        let v = c.bus_read(ea);
        c.AND(v);
    }),
    op(0x34, "BIT", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.bus_read(ea);
        c.BIT(v);
    }),
    op(0x3a, "DEC", Accumulator, |c| {
        c.implicit();
        c.a = c.DEC(c.a);
    }),
    op(0x3c, "BIT", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        let v = c.bus_read(ea);
        c.BIT(v);
    }),
    op(0x3e, "ROL", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.rmw(ea, Cpu::ROL);
    }),
    op(0x42, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0x44, "NOP", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_read(ea);
    }),
    op(0x52, "EOR", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        let v = c.bus_read(ea);
        c.EOR(v);
    }),
    op(0x54, "NOP", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0x5a, "PHY", Implied, |c| {
        let y = c.y;
        c.push_op(y);
    }),
    op(0x5c, "NOP", Absolute, |c| c.nop_5c()),
    op(0x5e, "LSR", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.rmw(ea, Cpu::LSR);
    }),
    op(0x62, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0x64, "STZ", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_write(ea, MachineInt(0));
    }),
    op(0x6c, "JMP", Indirect, |c| c.jmp_indirect_cmos()),
    op(0x72, "ADC", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        c.adc_addr(ea);
    }),
    op(0x74, "STZ", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_write(ea, MachineInt(0));
    }),
    op(0x7a, "PLY", Implied, |c| {
        let v = c.pull_op();
        c.LDY(v);
    }),
    op(0x7c, "JMP", AbsoluteIndirectX, |c| c.jmp_indirect_x()),
    op(0x7e, "ROR", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.rmw(ea, Cpu::ROR);
    }),
    op(0x80, "BRA", Relative, |c| c.branch(true)),
    op(0x82, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0x89, "BIT", Immediate, |c| {
        let v = c.immediate();
        c.BIT_imm(v);
    }),
    op(0x92, "STA", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        c.bus_write(ea, c.a);
    }),
    op(0x9c, "STZ", Absolute, |c| {
        let ea = c.addr_abs();
        c.bus_write(ea, MachineInt(0));
    }),
    op(0x9e, "STZ", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        c.bus_write(ea, MachineInt(0));
    }),
    op(0xb2, "LDA", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        let v = c.bus_read(ea);
        c.LDA(v);
    }),
    op(0xc2, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0xd2, "CMP", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        let v = c.bus_read(ea);
        c.CMP(c.a, v);
    }),
    op(0xd4, "NOP", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0xda, "PHX", Implied, |c| {
        let x = c.x;
        c.push_op(x);
    }),
    op(0xdc, "NOP", AbsoluteX, |c| {
        let base = c.addr_abs();
        let ea = base.no_carry(c.x);
        c.bus_read(ea);
    }),
    op(0xe2, "NOP", Immediate, |c| {
        c.immediate();
    }),
    op(0xf2, "SBC", ZeroPageIndirect, |c| {
        let ea = c.addr_izp();
        c.sbc_addr(ea);
    }),
    op(0xf4, "NOP", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0xfa, "PLX", Implied, |c| {
        let v = c.pull_op();
        c.LDX(v);
    }),
    op(0xfc, "NOP", AbsoluteX, |c| {
        let base = c.addr_abs();
        let ea = base.no_carry(c.x);
        c.bus_read(ea);
    }),
];

// The bit-per-opcode families, present on both the Rockwell and WDC
// parts.
pub(crate) static OPS_BITS_65C02: &[(u8, Instruction)] = &[
    op(0x07, "RMB0", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xfe);
    }),
    op(0x17, "RMB1", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xfd);
    }),
    op(0x27, "RMB2", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xfb);
    }),
    op(0x37, "RMB3", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xf7);
    }),
    op(0x47, "RMB4", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xef);
    }),
    op(0x57, "RMB5", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xdf);
    }),
    op(0x67, "RMB6", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0xbf);
    }),
    op(0x77, "RMB7", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v & 0x7f);
    }),
    op(0x87, "SMB0", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x01);
    }),
    op(0x97, "SMB1", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x02);
    }),
    op(0xa7, "SMB2", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x04);
    }),
    op(0xb7, "SMB3", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x08);
    }),
    op(0xc7, "SMB4", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x10);
    }),
    op(0xd7, "SMB5", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x20);
    }),
    op(0xe7, "SMB6", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x40);
    }),
    op(0xf7, "SMB7", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.rmw(ea, |_, v| v | 0x80);
    }),
    op(0x0f, "BBR0", ZeroPageRelative, |c| c.branch_bit(0x01, false)),
    op(0x1f, "BBR1", ZeroPageRelative, |c| c.branch_bit(0x02, false)),
    op(0x2f, "BBR2", ZeroPageRelative, |c| c.branch_bit(0x04, false)),
    op(0x3f, "BBR3", ZeroPageRelative, |c| c.branch_bit(0x08, false)),
    op(0x4f, "BBR4", ZeroPageRelative, |c| c.branch_bit(0x10, false)),
    op(0x5f, "BBR5", ZeroPageRelative, |c| c.branch_bit(0x20, false)),
    op(0x6f, "BBR6", ZeroPageRelative, |c| c.branch_bit(0x40, false)),
    op(0x7f, "BBR7", ZeroPageRelative, |c| c.branch_bit(0x80, false)),
    op(0x8f, "BBS0", ZeroPageRelative, |c| c.branch_bit(0x01, true)),
    op(0x9f, "BBS1", ZeroPageRelative, |c| c.branch_bit(0x02, true)),
    op(0xaf, "BBS2", ZeroPageRelative, |c| c.branch_bit(0x04, true)),
    op(0xbf, "BBS3", ZeroPageRelative, |c| c.branch_bit(0x08, true)),
    op(0xcf, "BBS4", ZeroPageRelative, |c| c.branch_bit(0x10, true)),
    op(0xdf, "BBS5", ZeroPageRelative, |c| c.branch_bit(0x20, true)),
    op(0xef, "BBS6", ZeroPageRelative, |c| c.branch_bit(0x40, true)),
    op(0xff, "BBS7", ZeroPageRelative, |c| c.branch_bit(0x80, true)),
];

// WDC-only; the Rockwell part leaves these two as NOPs.
pub(crate) static OPS_WDC_65C02: &[(u8, Instruction)] = &[
    op(0xcb, "WAI", Implied, |c| {
        c.implicit();
        c.wait = true;
    }),
    op(0xdb, "STP", Implied, |c| {
        c.implicit();
        c.stop = true;
    }),
];
