// Copyright 2026 the mos65xx developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The undocumented NMOS opcodes. Combined with the base table these
//! fill all 256 slots of the original 6502.

use crate::core::Cpu;
use crate::mi::*;
use crate::table::{op, Instruction};
use crate::table::Mode::*;

impl Cpu {
    // The unstable high-byte stores: the value written is masked with
    // (high byte of the base address) + 1, and on a page cross that
    // value corrupts the high byte of the target address.
    pub(crate) fn sha_store(&mut self, base: Addr, index: Byte, val: Byte) {
        self.bus_read(base.no_carry(index));
        let val = val & (base.hi() + 1);
        let addr = if base.check_carry(index) {
            Addr::from_bytes((base + index).lo(), val)
        } else {
            base + index
        };
        self.bus_write(addr, val);
    }

    // AND + ROR, with carry/overflow from the rotated value and its own
    // decimal-mode correction pass.
    #[allow(non_snake_case)]
    pub(crate) fn ARR(&mut self, val: Byte) {
        self.a &= val;
        let arr = (self.a >> 1) | (self.flags.c << 7);
        self.flags.nz(arr);

        if !self.flags.d {
            self.flags.set_c((arr & 0x40) != 0);
            self.flags.v = (arr & 0x40) ^ ((arr & 0x20) << 1);
            self.a = arr;
        } else {
            let mut arr = arr;
            self.flags.v = (arr ^ self.a) & 0x40;
            if (self.a & 0x0f) >= 0x05 {
                arr = ((arr + 0x06) & 0x0f) | (arr & 0xf0);
            }
            self.flags.set_c((self.a & 0xf0) >= 0x50);
            if self.flags.c() {
                arr += 0x60;
            }
            self.a = arr;
        }
    }
}

pub(crate) static OPS_NMOS_6502: &[(u8, Instruction)] = &[
    op(0x02, "HLT", Implied, |c| c.hlt()),
    op(0x03, "ASO", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x04, "SKB", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_read(ea);
    }),
    op(0x07, "ASO", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x0b, "ANC", Immediate, |c| {
        let v = c.immediate();
        c.AND(v);
        let n = c.flags.n();
        c.flags.set_c(n);
    }),
    op(0x0c, "SKW", Absolute, |c| {
        let ea = c.addr_abs();
        c.bus_read(ea);
    }),
    op(0x0f, "ASO", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x12, "HLT", Implied, |c| c.hlt()),
    op(0x13, "ASO", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x14, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0x17, "ASO", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x1a, "NOP", Implied, |c| c.implicit()),
    op(0x1b, "ASO", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x1c, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0x1f, "ASO", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::ASL);
        c.ORA(v);
    }),
    op(0x22, "HLT", Implied, |c| c.hlt()),
    op(0x23, "RLA", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x27, "RLA", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x2b, "ANC", Immediate, |c| {
        let v = c.immediate();
        c.AND(v);
        let n = c.flags.n();
        c.flags.set_c(n);
    }),
    op(0x2f, "RLA", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x32, "HLT", Implied, |c| c.hlt()),
    op(0x33, "RLA", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x34, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0x37, "RLA", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x3a, "NOP", Implied, |c| c.implicit()),
    op(0x3b, "RLA", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x3c, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0x3f, "RLA", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::ROL);
        c.AND(v);
    }),
    op(0x42, "HLT", Implied, |c| c.hlt()),
    op(0x43, "LSE", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x44, "SKB", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_read(ea);
    }),
    op(0x47, "LSE", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x4b, "ALR", Immediate, |c| {
        let v = c.immediate();
        c.AND(v);
        c.a = c.LSR(c.a);
    }),
    op(0x4f, "LSE", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x52, "HLT", Implied, |c| c.hlt()),
    op(0x53, "LSE", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x54, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0x57, "LSE", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x5a, "NOP", Implied, |c| c.implicit()),
    op(0x5b, "LSE", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x5c, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0x5f, "LSE", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::LSR);
        c.EOR(v);
    }),
    op(0x62, "HLT", Implied, |c| c.hlt()),
    op(0x63, "RRA", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x64, "SKB", ZeroPage, |c| {
        let ea = c.addr_zp();
        c.bus_read(ea);
    }),
    op(0x67, "RRA", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x6b, "ARR", Immediate, |c| {
        let v = c.immediate();
        c.ARR(v);
    }),
    op(0x6f, "RRA", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x72, "HLT", Implied, |c| c.hlt()),
    op(0x73, "RRA", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x74, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0x77, "RRA", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x7a, "NOP", Implied, |c| c.implicit()),
    op(0x7b, "RRA", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x7c, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0x7f, "RRA", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::ROR);
        c.ADC(v);
    }),
    op(0x80, "SKB", Immediate, |c| {
        c.immediate();
    }),
    op(0x82, "SKB", Immediate, |c| {
        c.immediate();
    }),
    op(0x83, "AXS", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.a & c.x;
        c.bus_write(ea, v);
    }),
    op(0x87, "AXS", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.a & c.x;
        c.bus_write(ea, v);
    }),
    op(0x89, "SKB", Immediate, |c| {
        c.immediate();
    }),
    op(0x8b, "XAA", Immediate, |c| {
        // Semi-stable: A = (A | magic) & X & #nn, with magic = 0xee.
        let v = c.immediate();
        c.a = (c.a | 0xee) & c.x & v;
        let a = c.a;
        c.flags.nz(a);
    }),
    op(0x8f, "AXS", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.a & c.x;
        c.bus_write(ea, v);
    }),
    op(0x92, "HLT", Implied, |c| c.hlt()),
    op(0x93, "AXA", IndirectY, |c| {
        let zp = c.addr_zp();
        let base = c.read_word_zp(zp);
        let v = c.a & c.x;
        c.sha_store(base, c.y, v);
    }),
    op(0x97, "AXS", ZeroPageY, |c| {
        let ea = c.addr_zpi(c.y);
        let v = c.a & c.x;
        c.bus_write(ea, v);
    }),
    op(0x9b, "TAS", AbsoluteY, |c| {
        let base = c.addr_abs();
        c.sp = c.a & c.x;
        let v = c.sp;
        c.sha_store(base, c.y, v);
    }),
    op(0x9c, "SAY", AbsoluteX, |c| {
        let base = c.addr_abs();
        let v = c.y;
        c.sha_store(base, c.x, v);
    }),
    op(0x9e, "XAS", AbsoluteY, |c| {
        let base = c.addr_abs();
        let v = c.x;
        c.sha_store(base, c.y, v);
    }),
    op(0x9f, "AXA", AbsoluteY, |c| {
        let base = c.addr_abs();
        let v = c.a & c.x;
        c.sha_store(base, c.y, v);
    }),
    op(0xa3, "LAX", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xa7, "LAX", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xab, "OAL", Immediate, |c| {
        // Semi-stable: A = X = (A | 0xee) & X & #nn. Other references
        // use 0xff for the magic constant.
        let v = c.immediate();
        let r = (c.a | 0xee) & c.x & v;
        c.a = r;
        c.x = r;
        c.flags.nz(r);
    }),
    op(0xaf, "LAX", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xb2, "HLT", Implied, |c| c.hlt()),
    op(0xb3, "LAX", IndirectY, |c| {
        let ea = c.addr_izy(false);
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xb7, "LAX", ZeroPageY, |c| {
        let ea = c.addr_zpi(c.y);
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xbb, "LAS", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.sp &= v;
        c.a = c.sp;
        c.x = c.sp;
        let r = c.sp;
        c.flags.nz(r);
    }),
    op(0xbf, "LAX", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, false);
        let v = c.bus_read(ea);
        c.LDA(v);
        c.x = v;
    }),
    op(0xc2, "SKB", Immediate, |c| {
        c.immediate();
    }),
    op(0xc3, "DCM", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xc7, "DCM", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xcb, "SAX", Immediate, |c| {
        // X = (A & X) - #nn, with carry as for CMP.
        let v = c.immediate();
        c.x &= c.a;
        let x = c.x;
        c.flags.set_c(v <= x);
        c.x -= v;
        let r = c.x;
        c.flags.nz(r);
    }),
    op(0xcf, "DCM", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xd2, "HLT", Implied, |c| c.hlt()),
    op(0xd3, "DCM", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xd4, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0xd7, "DCM", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xda, "NOP", Implied, |c| c.implicit()),
    op(0xdb, "DCM", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xdc, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0xdf, "DCM", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::DEC);
        c.CMP(c.a, v);
    }),
    op(0xe2, "SKB", Immediate, |c| {
        c.immediate();
    }),
    op(0xe3, "INS", IndirectX, |c| {
        let ea = c.addr_izx();
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xe7, "INS", ZeroPage, |c| {
        let ea = c.addr_zp();
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xeb, "SBC", Immediate, |c| {
        let v = c.immediate();
        c.SBC(v);
    }),
    op(0xef, "INS", Absolute, |c| {
        let ea = c.addr_abs();
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xf2, "HLT", Implied, |c| c.hlt()),
    op(0xf3, "INS", IndirectY, |c| {
        let ea = c.addr_izy(true);
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xf4, "SKB", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        c.bus_read(ea);
    }),
    op(0xf7, "INS", ZeroPageX, |c| {
        let ea = c.addr_zpi(c.x);
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xfa, "NOP", Implied, |c| c.implicit()),
    op(0xfb, "INS", AbsoluteY, |c| {
        let ea = c.addr_abi(c.y, true);
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
    op(0xfc, "SKW", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, false);
        c.bus_read(ea);
    }),
    op(0xff, "INS", AbsoluteX, |c| {
        let ea = c.addr_abi(c.x, true);
        let v = c.rmw(ea, Cpu::INC);
        c.SBC(v);
    }),
];
