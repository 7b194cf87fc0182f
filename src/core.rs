// Copyright 2026 the mos65xx developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use crate::mem::{HandlerRef, MemoryMap};
use crate::mi::*;
use crate::table::{self, Instruction, OpInfo};
use crate::Flavor;

const NMI_VECTOR: u16 = 0xfffa;
const RESET_VECTOR: u16 = 0xfffc;
const IRQ_VECTOR: u16 = 0xfffe;

/// Snapshot of the architectural CPU state. `set_state(state())` is the
/// identity; the wait/stop latches are not part of it.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub p: u8,
    pub sp: u8,
    pub pc: u16,
    pub cycles: u64,
}

/// Registers plus the raw bytes of the instruction at PC, gathered
/// without advancing the cycle counter.
#[derive(Copy, Clone, Debug)]
pub struct DebugInfo {
    pub pc: u16,
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub p: u8,
    pub size: u8,
    pub bytes: [u8; 3],
}

pub struct Cpu {
    pub(crate) flags: Flags,
    pub(crate) a: Byte,
    pub(crate) x: Byte,
    pub(crate) y: Byte,
    pub(crate) sp: Byte,
    pub(crate) pc: Addr,
    // Address of the most recent bus access; some CMOS phantom reads
    // re-read it.
    pub(crate) addr: Addr,
    cycles: Cycles,
    sync: bool,
    pub(crate) wait: bool,
    pub(crate) stop: bool,
    pub(crate) flavor: Flavor,
    table: [Instruction; 256],
    mem: MemoryMap,
}

impl Cpu {
    /// Builds the dispatch table for `flavor`. Panics if the NMOS table
    /// composition leaves an opcode unmapped.
    pub fn new(flavor: Flavor) -> Cpu {
        Cpu {
            flags: Default::default(),
            a: Default::default(),
            x: Default::default(),
            y: Default::default(),
            sp: MachineInt(0xff),
            pc: Default::default(),
            addr: Default::default(),
            cycles: Default::default(),
            sync: false,
            wait: false,
            stop: false,
            flavor,
            table: table::build(flavor),
            mem: MemoryMap::new(),
        }
    }

    #[inline]
    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn add_page_handler(&mut self, handler: HandlerRef) {
        self.mem.install(handler);
    }

    pub fn add_resettable_page_handler(&mut self, handler: HandlerRef) {
        self.mem.install_resettable(handler);
    }
}

// Step drivers. All of them process whole instructions and return
// immediately while the wait or stop latch is set.
impl Cpu {
    #[inline]
    fn step_one(&mut self) {
        self.sync = true;
        let op = self.fetch_operand();
        self.sync = false;
        let inst = self.table[op.0 as usize];
        (inst.exec)(self);
    }

    pub fn step(&mut self) {
        if self.wait || self.stop {
            return;
        }
        self.step_one();
    }

    pub fn step_with<F>(&mut self, mut cb: F)
    where
        F: FnMut(&mut Cpu),
    {
        if self.wait || self.stop {
            return;
        }
        self.step_one();
        cb(self);
    }

    pub fn step_n(&mut self, n: usize) {
        for _ in 0..n {
            if self.wait || self.stop {
                break;
            }
            self.step_one();
        }
    }

    /// Executes up to `n` instructions; halts early if `cb` returns true.
    pub fn step_n_with<F>(&mut self, n: usize, mut cb: F)
    where
        F: FnMut(&mut Cpu) -> bool,
    {
        for _ in 0..n {
            if self.wait || self.stop {
                break;
            }
            self.step_one();
            if cb(self) {
                break;
            }
        }
    }

    /// Executes whole instructions until at least `budget` cycles have
    /// elapsed; may overshoot by the cost of the last instruction.
    pub fn step_cycles(&mut self, budget: u64) {
        let end = self.cycles + MachineInt(budget);
        while self.cycles < end {
            if self.wait || self.stop {
                break;
            }
            self.step_one();
        }
    }

    pub fn step_cycles_with<F>(&mut self, budget: u64, mut cb: F)
    where
        F: FnMut(&mut Cpu) -> bool,
    {
        let end = self.cycles + MachineInt(budget);
        while self.cycles < end {
            if self.wait || self.stop {
                break;
            }
            self.step_one();
            if cb(self) {
                break;
            }
        }
    }
}

// Signals.
impl Cpu {
    /// Loads PC from the reset vector (two observable cycles), restores
    /// the power-on register file, clears the wait/stop latches, and
    /// resets every registered resettable handler in registration order.
    /// The cycle counter is not zeroed.
    pub fn reset(&mut self) {
        self.flags = Default::default();
        self.a = MachineInt(0);
        self.x = MachineInt(0);
        self.y = MachineInt(0);
        self.sp = MachineInt(0xff);
        self.wait = false;
        self.stop = false;
        self.pc = self.read_word(MachineInt(RESET_VECTOR));
        self.mem.reset();
    }

    /// Honored only while the I flag is clear; a masked IRQ still clears
    /// the wait latch. Ignored entirely after STP/HLT.
    pub fn irq(&mut self) {
        if self.stop {
            return;
        }
        self.wait = false;
        if self.flags.i {
            return;
        }
        self.interrupt(IRQ_VECTOR);
    }

    pub fn nmi(&mut self) {
        if self.stop {
            return;
        }
        self.wait = false;
        self.interrupt(NMI_VECTOR);
    }

    fn interrupt(&mut self, vector: u16) {
        let pch = self.pc.hi();
        self.push(pch);
        let pcl = self.pc.lo();
        self.push(pcl);
        // B is clear in the copy pushed for an interrupt.
        let p = self.flags.to_byte();
        self.push(p);
        self.flags.i = true;
        if self.flavor.is_cmos() {
            self.flags.d = false;
        }
        self.pc = self.read_word(MachineInt(vector));
    }
}

// Introspection and host peek/poke. None of these advance the cycle
// counter.
impl Cpu {
    pub fn state(&self) -> CpuState {
        CpuState {
            a: self.a.0,
            x: self.x.0,
            y: self.y.0,
            p: self.flags.to_byte().0,
            sp: self.sp.0,
            pc: self.pc.0,
            cycles: self.cycles.0,
        }
    }

    pub fn set_state(&mut self, state: CpuState) {
        self.a = MachineInt(state.a);
        self.x = MachineInt(state.x);
        self.y = MachineInt(state.y);
        self.flags.from_byte(MachineInt(state.p));
        self.sp = MachineInt(state.sp);
        self.pc = MachineInt(state.pc);
        self.cycles = MachineInt(state.cycles);
    }

    #[inline]
    pub fn pc(&self) -> u16 {
        self.pc.0
    }

    #[inline]
    pub fn set_pc(&mut self, val: u16) {
        self.pc.0 = val;
    }

    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles.0
    }

    /// True only while the opcode byte of an instruction is being
    /// fetched.
    #[inline]
    pub fn sync(&self) -> bool {
        self.sync
    }

    #[inline]
    pub fn waiting(&self) -> bool {
        self.wait
    }

    #[inline]
    pub fn stopped(&self) -> bool {
        self.stop
    }

    pub fn op_info(&self, op: u8) -> OpInfo {
        let inst = &self.table[op as usize];
        OpInfo {
            mnemonic: inst.name,
            mode: inst.mode,
            size: inst.mode.size(),
        }
    }

    pub fn debug_info(&self) -> DebugInfo {
        let pc = self.pc.0;
        let info = self.op_info(self.read(pc));
        let mut bytes = [0; 3];
        for i in 0..info.size {
            bytes[i as usize] = self.read(pc.wrapping_add(u16::from(i)));
        }
        DebugInfo {
            pc,
            a: self.a.0,
            x: self.x.0,
            y: self.y.0,
            sp: self.sp.0,
            p: self.flags.to_byte().0,
            size: info.size,
            bytes,
        }
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.mem.read((addr >> 8) as u8, addr as u8)
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u8) {
        self.mem.write((addr >> 8) as u8, addr as u8, value);
    }

    #[inline]
    pub fn read_paged(&self, page: u8, offset: u8) -> u8 {
        self.mem.read(page, offset)
    }

    #[inline]
    pub fn write_paged(&mut self, page: u8, offset: u8, value: u8) {
        self.mem.write(page, offset, value);
    }
}

// Bus operations. Every instruction-stream read and write funnels
// through bus_read/bus_write; each call is one cycle.
impl Cpu {
    #[inline]
    pub(crate) fn bus_read(&mut self, addr: Addr) -> Byte {
        self.addr = addr;
        self.cycles += 1;
        MachineInt(self.mem.read(addr.hi().0, addr.lo().0))
    }

    #[inline]
    pub(crate) fn bus_write(&mut self, addr: Addr, val: Byte) {
        self.addr = addr;
        self.cycles += 1;
        self.mem.write(addr.hi().0, addr.lo().0, val.0);
    }

    #[inline]
    pub(crate) fn fetch_operand(&mut self) -> Byte {
        let val = self.bus_read(self.pc);
        self.pc += 1;
        val
    }

    pub(crate) fn read_word(&mut self, addr: Addr) -> Addr {
        let lo = self.bus_read(addr);
        let hi = self.bus_read(addr + 1);
        Addr::from_bytes(lo, hi)
    }

    // Zero-page vectors wrap within page 0.
    pub(crate) fn read_word_zp(&mut self, zp: Addr) -> Addr {
        let lo = self.bus_read(zp);
        let hi = self.bus_read(zp.no_carry(1));
        Addr::from_bytes(lo, hi)
    }

    // The NMOS indirect-JMP bug: the high byte is fetched without carry
    // into the page.
    fn read_word_bug(&mut self, addr: Addr) -> Addr {
        let lo = self.bus_read(addr);
        let hi = self.bus_read((addr & 0xff00) | ((addr + 1) & 0x00ff));
        Addr::from_bytes(lo, hi)
    }

    #[inline]
    pub(crate) fn push(&mut self, val: Byte) {
        self.bus_write(Addr::stack(self.sp), val);
        self.sp -= 1;
    }

    #[inline]
    pub(crate) fn pull(&mut self) -> Byte {
        self.sp += 1;
        self.bus_read(Addr::stack(self.sp))
    }
}

// Addressing modes. The phantom accesses mirror real silicon; where the
// NMOS and CMOS parts differ, the primitive branches on flavor.
impl Cpu {
    #[inline]
    pub(crate) fn implicit(&mut self) {
        self.bus_read(self.pc);
    }

    #[inline]
    pub(crate) fn immediate(&mut self) -> Byte {
        self.fetch_operand()
    }

    pub(crate) fn addr_zp(&mut self) -> Addr {
        Addr::zp(self.fetch_operand())
    }

    // zp,X / zp,Y: the un-indexed zero-page address is read first.
    pub(crate) fn addr_zpi(&mut self, reg: Byte) -> Addr {
        let base = self.addr_zp();
        self.bus_read(base);
        base.no_carry(reg)
    }

    pub(crate) fn addr_abs(&mut self) -> Addr {
        let lo = self.fetch_operand();
        let hi = self.fetch_operand();
        Addr::from_bytes(lo, hi)
    }

    // abs,X / abs,Y. `always` charges the fixup cycle whether or not the
    // index crosses a page (stores, and NMOS read-modify-write). NMOS
    // reads from the pre-fixup address; CMOS re-reads PC.
    pub(crate) fn addr_abi(&mut self, reg: Byte, always: bool) -> Addr {
        let base = self.addr_abs();
        if always || base.check_carry(reg) {
            if self.flavor.is_cmos() {
                self.bus_read(self.pc);
            } else {
                self.bus_read(base.no_carry(reg));
            }
        }
        base + reg
    }

    pub(crate) fn addr_izx(&mut self) -> Addr {
        let base = self.addr_zp();
        self.bus_read(base);
        let base = base.no_carry(self.x);
        self.read_word_zp(base)
    }

    pub(crate) fn addr_izy(&mut self, always: bool) -> Addr {
        let zp = self.addr_zp();
        let base = self.read_word_zp(zp);
        if always || base.check_carry(self.y) {
            if self.flavor.is_cmos() {
                self.bus_read(self.pc);
            } else {
                self.bus_read(base.no_carry(self.y));
            }
        }
        base + self.y
    }

    // CMOS ($nn).
    pub(crate) fn addr_izp(&mut self) -> Addr {
        let zp = self.addr_zp();
        self.read_word_zp(zp)
    }

    // The spurious inner cycle is a write of the unmodified value on
    // NMOS and a re-read of the address on CMOS.
    pub(crate) fn rmw<F>(&mut self, addr: Addr, op: F) -> Byte
    where
        F: Fn(&mut Cpu, Byte) -> Byte,
    {
        let val = self.bus_read(addr);
        if self.flavor.is_cmos() {
            self.bus_read(addr);
        } else {
            self.bus_write(addr, val);
        }
        let val = op(self, val);
        self.bus_write(addr, val);
        val
    }

    pub(crate) fn branch(&mut self, taken: bool) {
        let offset = BranchOffset::as_from(self.fetch_operand());
        if taken {
            self.bus_read(self.pc);
            if self.pc.check_carry(offset) {
                self.bus_read(self.pc.no_carry(offset));
            }
            self.pc += offset;
        }
    }
}

// Control flow.
impl Cpu {
    // BRK pushes PC past the signature byte, with B set in the pushed
    // status.
    pub(crate) fn brk(&mut self) {
        self.fetch_operand();
        let pch = self.pc.hi();
        self.push(pch);
        let pcl = self.pc.lo();
        self.push(pcl);
        let p = self.flags.to_byte() | 0x10;
        self.push(p);
        self.flags.i = true;
        if self.flavor.is_cmos() {
            self.flags.d = false;
        }
        self.pc = self.read_word(MachineInt(IRQ_VECTOR));
    }

    pub(crate) fn jsr(&mut self) {
        let lo = self.fetch_operand();
        self.bus_read(Addr::stack(self.sp));
        let pch = self.pc.hi();
        self.push(pch);
        let pcl = self.pc.lo();
        self.push(pcl);
        let hi = self.fetch_operand();
        self.pc = Addr::from_bytes(lo, hi);
    }

    pub(crate) fn rts(&mut self) {
        self.implicit();
        self.bus_read(Addr::stack(self.sp));
        let lo = self.pull();
        let hi = self.pull();
        self.pc = Addr::from_bytes(lo, hi);
        self.bus_read(self.pc);
        self.pc += 1;
    }

    // RTI pulls P then PC unchanged (no increment, unlike RTS).
    pub(crate) fn rti(&mut self) {
        self.implicit();
        self.bus_read(Addr::stack(self.sp));
        let p = self.pull();
        self.flags.from_byte(p);
        let lo = self.pull();
        let hi = self.pull();
        self.pc = Addr::from_bytes(lo, hi);
    }

    pub(crate) fn jmp_indirect(&mut self) {
        let addr = self.addr_abs();
        self.pc = self.read_word_bug(addr);
    }

    pub(crate) fn php(&mut self) {
        self.implicit();
        let p = self.flags.to_byte() | 0x10;
        self.push(p);
    }

    pub(crate) fn plp(&mut self) {
        let p = self.pull_op();
        self.flags.from_byte(p);
    }

    // Dead stack read at the pre-increment SP, as on real silicon.
    pub(crate) fn pull_op(&mut self) -> Byte {
        self.implicit();
        self.bus_read(Addr::stack(self.sp));
        self.pull()
    }

    pub(crate) fn push_op(&mut self, val: Byte) {
        self.implicit();
        self.push(val);
    }

    // An NMOS HLT latches stop with PC left at the opcode.
    pub(crate) fn hlt(&mut self) {
        self.pc -= 1;
        self.stop = true;
    }
}

// ALU.
#[allow(non_snake_case)]
impl Cpu {
    #[inline]
    pub(crate) fn ADC(&mut self, val: Byte) {
        if self.flags.d {
            if self.flavor.is_cmos() {
                self.ADC_dec_cmos(Word::from(val));
            } else {
                self.ADC_dec(Word::from(val));
            }
        } else {
            self.ADC_hex(Word::from(val));
        }
    }

    #[inline]
    fn ADC_hex(&mut self, val: Word) {
        let sum = self.a + val + self.flags.c;
        let v = !(self.a ^ val) & (val ^ sum) & 0x80;
        self.flags.v = v.lo();
        self.flags.set_c(sum > 0xff);
        self.a = sum.lo();
        self.flags.nz(self.a);
    }

    // NMOS: N/V from the intermediate sum, Z from the binary sum.
    #[inline]
    fn ADC_dec(&mut self, val: Word) {
        let mut sl = (self.a & 0x0f) + (val & 0x0f) + self.flags.c;
        if sl >= 0x0a {
            sl = ((sl + 0x06) & 0x0f) + 0x10;
        }
        let mut sum = (self.a & 0xf0) + (val & 0xf0) + sl;
        let v = !(self.a ^ val) & (val ^ sum) & 0x80;
        self.flags.v = v.lo();
        self.flags.n = sum.lo();

        self.flags.z = (self.a + val + self.flags.c).lo();

        if sum >= 0xa0 {
            sum += 0x60;
        }
        self.flags.set_c(sum >= 0x100);
        self.a = sum.lo();
    }

    // CMOS: all flags from the corrected result.
    #[inline]
    fn ADC_dec_cmos(&mut self, val: Word) {
        let mut sl = (self.a & 0x0f) + (val & 0x0f) + self.flags.c;
        if sl >= 0x0a {
            sl = ((sl + 0x06) & 0x0f) + 0x10;
        }
        let mut sum = (self.a & 0xf0) + (val & 0xf0) + sl;
        let v = !(self.a ^ val) & (val ^ sum) & 0x80;
        self.flags.v = v.lo();

        if sum >= 0xa0 {
            sum += 0x60;
        }
        self.flags.set_c(sum >= 0x100);
        self.a = sum.lo();
        self.flags.nz(self.a);
    }

    #[inline]
    pub(crate) fn SBC(&mut self, val: Byte) {
        if self.flags.d {
            if self.flavor.is_cmos() {
                self.SBC_dec_cmos(Word::from(val));
            } else {
                self.SBC_dec(Word::from(val));
            }
        } else {
            self.SBC_hex(Word::from(val));
        }
    }

    #[inline]
    fn SBC_hex(&mut self, val: Word) {
        let diff = self.a - val - (!self.flags.c() as u16);
        let v = (self.a ^ diff) & (self.a ^ val) & 0x80;
        self.flags.v = v.lo();
        self.flags.set_c(diff < 0x100);
        self.a = diff.lo();
        self.flags.nz(self.a);
    }

    #[inline]
    fn SBC_dec(&mut self, val: Word) {
        let bdiff = self.a - val - (!self.flags.c() as u16);
        let v = (self.a ^ bdiff) & (self.a ^ val) & 0x80;
        self.flags.v = v.lo();
        self.flags.nz(bdiff.lo());

        let val = SignedWord::as_from(val);
        let mut dl = (self.a & 0x0f) - (val & 0x0f) - (!self.flags.c() as i16);
        if dl < 0 {
            dl = ((dl - 0x06) & 0x0f) - 0x10;
        }
        let mut diff = (self.a & 0xf0) - (val & 0xf0) + dl;
        if diff < 0 {
            diff -= 0x60;
        }

        self.flags.set_c(bdiff < 0x100);
        self.a = Byte::as_from(diff);
    }

    // The 65C02 corrects the two nibbles independently, which differs
    // from NMOS for non-BCD inputs.
    #[inline]
    fn SBC_dec_cmos(&mut self, val: Word) {
        let bdiff = self.a - val - (!self.flags.c() as u16);
        let v = (self.a ^ bdiff) & (self.a ^ val) & 0x80;
        self.flags.v = v.lo();

        let val = SignedWord::as_from(val);
        let dl = (self.a & 0x0f) - (val & 0x0f) - (!self.flags.c() as i16);
        let mut diff = self.a - val - (!self.flags.c() as i16);
        if diff < 0 {
            diff -= 0x60;
        }
        if dl < 0 {
            diff -= 0x06;
        }

        self.flags.set_c(bdiff < 0x100);
        self.a = Byte::as_from(diff);
        self.flags.nz(self.a);
    }

    // ADC/SBC against memory; decimal mode on CMOS re-reads the operand
    // address for one extra cycle.
    pub(crate) fn adc_addr(&mut self, addr: Addr) {
        let val = self.bus_read(addr);
        if self.flavor.is_cmos() && self.flags.d {
            self.bus_read(addr);
        }
        self.ADC(val);
    }

    pub(crate) fn sbc_addr(&mut self, addr: Addr) {
        let val = self.bus_read(addr);
        if self.flavor.is_cmos() && self.flags.d {
            self.bus_read(addr);
        }
        self.SBC(val);
    }

    // Immediate-mode decimal fixups read a flavor-specific ROM address.
    pub(crate) fn adc_imm(&mut self) {
        let val = self.fetch_operand();
        if self.flavor.is_cmos() && self.flags.d {
            let fixup = match self.flavor {
                Flavor::Wdc65C02 => MachineInt(0x7f),
                _ => MachineInt(0x59),
            };
            self.bus_read(fixup);
        }
        self.ADC(val);
    }

    pub(crate) fn sbc_imm(&mut self) {
        let val = self.fetch_operand();
        if self.flavor.is_cmos() && self.flags.d {
            let fixup = match self.flavor {
                Flavor::Wdc65C02 => MachineInt(0xb8),
                _ => MachineInt(0xb1),
            };
            self.bus_read(fixup);
        }
        self.SBC(val);
    }

    #[inline]
    pub(crate) fn AND(&mut self, val: Byte) {
        self.a &= val;
        self.flags.nz(self.a);
    }

    #[inline]
    pub(crate) fn ORA(&mut self, val: Byte) {
        self.a |= val;
        self.flags.nz(self.a);
    }

    #[inline]
    pub(crate) fn EOR(&mut self, val: Byte) {
        self.a ^= val;
        self.flags.nz(self.a);
    }

    #[inline]
    pub(crate) fn ASL(&mut self, val: Byte) -> Byte {
        self.flags.c = val >> 7;
        let val = val << 1;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn LSR(&mut self, val: Byte) -> Byte {
        self.flags.c = val & 1;
        let val = val >> 1;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn ROL(&mut self, val: Byte) -> Byte {
        let c = self.flags.c;
        self.flags.c = val >> 7;
        let val = (val << 1) | c;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn ROR(&mut self, val: Byte) -> Byte {
        let c = self.flags.c << 7;
        self.flags.c = val & 1;
        let val = (val >> 1) | c;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn INC(&mut self, val: Byte) -> Byte {
        let val = val + 1;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn DEC(&mut self, val: Byte) -> Byte {
        let val = val - 1;
        self.flags.nz(val);
        val
    }

    #[inline]
    pub(crate) fn BIT(&mut self, val: Byte) {
        self.flags.z = self.a & val;
        self.flags.v = val & 0x40;
        self.flags.n = val;
    }

    // BIT #nn updates Z only.
    #[inline]
    pub(crate) fn BIT_imm(&mut self, val: Byte) {
        self.flags.z = self.a & val;
    }

    #[inline]
    pub(crate) fn CMP(&mut self, reg: Byte, val: Byte) {
        let r = reg - val;
        self.flags.nz(r);
        self.flags.set_c(val <= reg);
    }

    #[inline]
    pub(crate) fn LDA(&mut self, val: Byte) {
        self.a = val;
        self.flags.nz(val);
    }

    #[inline]
    pub(crate) fn LDX(&mut self, val: Byte) {
        self.x = val;
        self.flags.nz(val);
    }

    #[inline]
    pub(crate) fn LDY(&mut self, val: Byte) {
        self.y = val;
        self.flags.nz(val);
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "PC: {:04x} A: {:02x} X: {:02x} Y: {:02x} S: {:02x} P: {:?}",
            self.pc, self.a.0, self.x.0, self.y.0, self.sp.0, self.flags,
        )
    }
}

// N and Z hold the last value that affected them; V and C are
// zero/nonzero bytes.
#[derive(Clone)]
pub(crate) struct Flags {
    pub n: Byte,
    pub v: Byte,
    pub d: bool,
    pub i: bool,
    pub z: Byte,
    pub c: Byte,
}

impl Default for Flags {
    // Power-on state: only the X bit reads as set.
    fn default() -> Flags {
        Flags {
            n: MachineInt(0),
            v: MachineInt(0),
            d: false,
            i: false,
            z: MachineInt(1),
            c: MachineInt(0),
        }
    }
}

impl Flags {
    #[inline]
    pub fn n(&self) -> bool {
        (self.n & 0x80) != 0
    }

    #[inline]
    pub fn v(&self) -> bool {
        self.v != 0
    }

    #[inline]
    pub fn z(&self) -> bool {
        self.z == 0
    }

    #[inline]
    pub fn c(&self) -> bool {
        self.c != 0
    }

    #[inline]
    pub fn set_c(&mut self, set: bool) {
        self.c = MachineInt(set as u8);
    }

    #[inline]
    pub fn set_v(&mut self, set: bool) {
        self.v = MachineInt(set as u8);
    }

    #[inline]
    pub fn set_z(&mut self, set: bool) {
        self.z = MachineInt(!set as u8);
    }

    #[inline]
    pub fn nz(&mut self, val: Byte) {
        self.n = val;
        self.z = val;
    }

    // The composed byte always has X set and B clear; BRK/PHP set B in
    // the pushed copy only.
    pub fn to_byte(&self) -> Byte {
        self.n & 0x80
            | (self.v() as u8) << 6
            | 0x20
            | (self.d as u8) << 3
            | (self.i as u8) << 2
            | (self.z() as u8) << 1
            | self.c
    }

    pub fn from_byte(&mut self, val: Byte) {
        self.n = val;
        self.v = val & 0x40;
        self.d = (val & 0x08) != 0;
        self.i = (val & 0x04) != 0;
        self.set_z((val & 0x02) != 0);
        self.c = val & 1;
    }
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = if self.n() { "N" } else { "n" };
        let v = if self.v() { "V" } else { "v" };
        let d = if self.d { "D" } else { "d" };
        let i = if self.i { "I" } else { "i" };
        let z = if self.z() { "Z" } else { "z" };
        let c = if self.c() { "C" } else { "c" };
        write!(f, "{}{}-b{}{}{}{}", n, v, d, i, z, c)
    }
}
