// Copyright 2026 the mos65xx developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use mos65xx::Flavor;

use self::common::*;
use self::Access::*;

mod common;

fn with_regs(cpu: &mut mos65xx::Cpu, f: impl Fn(&mut mos65xx::CpuState)) {
    let mut state = cpu.state();
    f(&mut state);
    cpu.set_state(state);
}

#[test]
fn lda_absx_page_cross_penalty() {
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0xbd, 0x00, 0x20]);
        with_regs(&mut cpu, |s| s.x = 0x05);
        cpu.step();
        assert_eq!(cpu.cycles(), 4, "{:?} no cross", flavor);

        let mut cpu = cpu_with_prog(flavor, &[0xbd, 0xff, 0x20]);
        with_regs(&mut cpu, |s| s.x = 0x05);
        cpu.step();
        assert_eq!(cpu.cycles(), 5, "{:?} cross", flavor);
    }
}

// The phantom read of the fixup cycle hits the pre-fixup address on
// NMOS and the current PC on CMOS.
#[test]
fn absx_phantom_addresses() {
    let (mut cpu, trace) =
        tracing_cpu_with_prog(Flavor::Nmos6502, &[0xbd, 0xff, 0x12]);
    with_regs(&mut cpu, |s| s.x = 0x01);
    cpu.step();
    assert_eq!(
        trace.borrow().log,
        vec![
            Read(0x0400),
            Read(0x0401),
            Read(0x0402),
            Read(0x1200),
            Read(0x1300),
        ]
    );

    let (mut cpu, trace) =
        tracing_cpu_with_prog(Flavor::Wdc65C02, &[0xbd, 0xff, 0x12]);
    with_regs(&mut cpu, |s| s.x = 0x01);
    cpu.step();
    assert_eq!(
        trace.borrow().log,
        vec![
            Read(0x0400),
            Read(0x0401),
            Read(0x0402),
            Read(0x0403),
            Read(0x1300),
        ]
    );
}

#[test]
fn sta_absx_always_pays() {
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x9d, 0x00, 0x20]);
        with_regs(&mut cpu, |s| {
            s.a = 0x55;
            s.x = 0x05;
        });
        cpu.step();
        assert_eq!(cpu.cycles(), 5, "{:?}", flavor);
        assert_eq!(cpu.read(0x2005), 0x55);
    }
}

#[test]
fn lda_izy_page_cross_penalty() {
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0xb1, 0x80]);
        load(&mut cpu, 0x0080, &[0x00, 0x20]);
        with_regs(&mut cpu, |s| s.y = 0x01);
        cpu.step();
        assert_eq!(cpu.cycles(), 5, "{:?} no cross", flavor);

        let mut cpu = cpu_with_prog(flavor, &[0xb1, 0x80]);
        load(&mut cpu, 0x0080, &[0xff, 0x20]);
        with_regs(&mut cpu, |s| s.y = 0x01);
        cpu.step();
        assert_eq!(cpu.cycles(), 6, "{:?} cross", flavor);
    }
}

#[test]
fn sta_izy_always_pays() {
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x91, 0x80]);
        load(&mut cpu, 0x0080, &[0x00, 0x20]);
        with_regs(&mut cpu, |s| {
            s.a = 0x66;
            s.y = 0x01;
        });
        cpu.step();
        assert_eq!(cpu.cycles(), 6, "{:?}", flavor);
        assert_eq!(cpu.read(0x2001), 0x66);
    }
}

// Zero-page indexing reads the un-indexed address first and wraps in
// page zero.
#[test]
fn zpx_wraps_and_phantoms() {
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0xb5, 0xc0]);
        cpu.write(0x0040, 0x99);
        with_regs(&mut cpu, |s| s.x = 0x80);
        cpu.step();
        assert_eq!(cpu.state().a, 0x99);
        assert_eq!(cpu.cycles(), 4);
    }
}

// The inner R-M-W cycle is a write of the old value on NMOS, a re-read
// on CMOS.
#[test]
fn rmw_inner_cycle() {
    let (mut cpu, trace) =
        tracing_cpu_with_prog(Flavor::Nmos6502, &[0x0e, 0x00, 0x20]);
    cpu.write(0x2000, 0x41);
    trace.borrow_mut().log.clear();
    cpu.step();
    assert_eq!(
        trace.borrow().log,
        vec![
            Read(0x0400),
            Read(0x0401),
            Read(0x0402),
            Read(0x2000),
            Write(0x2000, 0x41),
            Write(0x2000, 0x82),
        ]
    );

    let (mut cpu, trace) =
        tracing_cpu_with_prog(Flavor::Rockwell65C02, &[0x0e, 0x00, 0x20]);
    cpu.write(0x2000, 0x41);
    trace.borrow_mut().log.clear();
    cpu.step();
    assert_eq!(
        trace.borrow().log,
        vec![
            Read(0x0400),
            Read(0x0401),
            Read(0x0402),
            Read(0x2000),
            Read(0x2000),
            Write(0x2000, 0x82),
        ]
    );
}

#[test]
fn rmw_absx_cycles_by_flavor() {
    // NMOS shifts on abs,X always take 7.
    let mut cpu = cpu_with_prog(Flavor::Nmos6502, &[0x1e, 0x00, 0x20]);
    cpu.step();
    assert_eq!(cpu.cycles(), 7);

    // CMOS shifts pay the fixup cycle only on a page cross.
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x1e, 0x00, 0x20]);
        cpu.step();
        assert_eq!(cpu.cycles(), 6, "{:?} no cross", flavor);

        let mut cpu = cpu_with_prog(flavor, &[0x1e, 0xff, 0x20]);
        with_regs(&mut cpu, |s| s.x = 0x01);
        cpu.step();
        assert_eq!(cpu.cycles(), 7, "{:?} cross", flavor);

        // INC/DEC abs,X keep the unconditional cycle.
        let mut cpu = cpu_with_prog(flavor, &[0xfe, 0x00, 0x20]);
        cpu.step();
        assert_eq!(cpu.cycles(), 7, "{:?} inc", flavor);
    }
}

#[test]
fn branch_cycles() {
    for flavor in all_flavors() {
        // BNE not taken (Z set after LDA #0).
        let mut cpu = cpu_with_prog(flavor, &[0xa9, 0x00, 0xd0, 0x10]);
        cpu.step_n(2);
        assert_eq!(cpu.cycles(), 2 + 2);
        assert_eq!(cpu.pc(), 0x0404);

        // BEQ taken, same page.
        let mut cpu = cpu_with_prog(flavor, &[0xa9, 0x00, 0xf0, 0x10]);
        cpu.step_n(2);
        assert_eq!(cpu.cycles(), 2 + 3);
        assert_eq!(cpu.pc(), 0x0414);
    }
}

#[test]
fn cmos_nop_lengths_and_cycles() {
    for flavor in cmos_flavors() {
        // Unassigned column: one byte, one cycle.
        let mut cpu = cpu_with_prog(flavor, &[0x03]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0401, 1), "{:?}", flavor);

        let mut cpu = cpu_with_prog(flavor, &[0x02, 0x12]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0402, 2));

        let mut cpu = cpu_with_prog(flavor, &[0x44, 0x12]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0402, 3));

        let mut cpu = cpu_with_prog(flavor, &[0x54, 0x12]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0402, 4));

        let mut cpu = cpu_with_prog(flavor, &[0xdc, 0x34, 0x12]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0403, 4));

        let mut cpu = cpu_with_prog(flavor, &[0x5c, 0x34, 0x12]);
        cpu.step();
        assert_eq!((cpu.pc(), cpu.cycles()), (0x0403, 8));
    }
}

#[test]
fn nop_5c_bus_pattern() {
    let (mut cpu, trace) =
        tracing_cpu_with_prog(Flavor::Wdc65C02, &[0x5c, 0x12, 0x34]);
    cpu.step();
    assert_eq!(
        trace.borrow().log,
        vec![
            Read(0x0400),
            Read(0x0401),
            Read(0x0402),
            Read(0xff12),
            Read(0xffff),
            Read(0xffff),
            Read(0xffff),
            Read(0xffff),
        ]
    );
}

// Decimal-mode ADC/SBC on CMOS charge one extra read: the operand
// address, or a flavor-specific fixup address for immediate mode.
#[test]
fn cmos_decimal_extra_cycle() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x65, 0x10]);
        cpu.write(0x0010, 0x05);
        with_regs(&mut cpu, |s| s.p |= 0x08);
        cpu.step();
        assert_eq!(cpu.cycles(), 4, "{:?}", flavor);
        assert_eq!(cpu.state().a, 0x05);
    }

    // NMOS: no extra cycle.
    let mut cpu = cpu_with_prog(Flavor::Nmos6502, &[0x65, 0x10]);
    cpu.write(0x0010, 0x05);
    with_regs(&mut cpu, |s| s.p |= 0x08);
    cpu.step();
    assert_eq!(cpu.cycles(), 3);
}

#[test]
fn decimal_immediate_fixup_addresses() {
    let cases = [
        (Flavor::Rockwell65C02, 0x69, 0x0059),
        (Flavor::Rockwell65C02, 0xe9, 0x00b1),
        (Flavor::Wdc65C02, 0x69, 0x007f),
        (Flavor::Wdc65C02, 0xe9, 0x00b8),
    ];
    for &(flavor, opcode, fixup) in &cases {
        let (mut cpu, trace) =
            tracing_cpu_with_prog(flavor, &[opcode, 0x01]);
        with_regs(&mut cpu, |s| {
            s.p |= 0x08 | 0x01; // decimal, carry
        });
        cpu.step();
        assert_eq!(
            trace.borrow().log,
            vec![Read(0x0400), Read(0x0401), Read(fixup)],
            "{:?} {:02x}",
            flavor,
            opcode
        );
    }
}

#[test]
fn cmos_decimal_flags_from_result() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x69, 0x10]);
        with_regs(&mut cpu, |s| {
            s.a = 0x91;
            s.p = 0x28;
        });
        cpu.step();
        let state = cpu.state();
        assert_eq!(state.a, 0x01);
        // N clear on CMOS: flags come from the corrected result.
        assert_eq!(state.p & 0x80, 0, "{:?}", flavor);
        assert_ne!(state.p & 0x01, 0);
        assert_eq!(state.cycles, 3);
    }
}

#[test]
fn trb_tsb() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x04, 0x10]); // TSB $10
        cpu.write(0x0010, 0xf0);
        with_regs(&mut cpu, |s| s.a = 0x0f);
        cpu.step();
        assert_eq!(cpu.read(0x0010), 0xff);
        assert_ne!(cpu.state().p & 0x02, 0); // A & old == 0
        assert_eq!(cpu.cycles(), 5);

        let mut cpu = cpu_with_prog(flavor, &[0x1c, 0x00, 0x20]); // TRB $2000
        cpu.write(0x2000, 0xff);
        with_regs(&mut cpu, |s| s.a = 0x0f);
        cpu.step();
        assert_eq!(cpu.read(0x2000), 0xf0);
        assert_eq!(cpu.state().p & 0x02, 0);
        assert_eq!(cpu.cycles(), 6);
    }
}

#[test]
fn stz() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x64, 0x10]);
        cpu.write(0x0010, 0x55);
        cpu.step();
        assert_eq!(cpu.read(0x0010), 0x00);
        assert_eq!(cpu.cycles(), 3);

        let mut cpu = cpu_with_prog(flavor, &[0x9e, 0x00, 0x20]);
        cpu.write(0x2001, 0x55);
        with_regs(&mut cpu, |s| s.x = 0x01);
        cpu.step();
        assert_eq!(cpu.read(0x2001), 0x00);
        assert_eq!(cpu.cycles(), 5);
    }
}

#[test]
fn zp_indirect_modes() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0xb2, 0x80]); // LDA ($80)
        load(&mut cpu, 0x0080, &[0x34, 0x12]);
        cpu.write(0x1234, 0x77);
        cpu.step();
        assert_eq!(cpu.state().a, 0x77);
        assert_eq!(cpu.cycles(), 5);

        let mut cpu = cpu_with_prog(flavor, &[0x92, 0x80]); // STA ($80)
        load(&mut cpu, 0x0080, &[0x34, 0x12]);
        with_regs(&mut cpu, |s| s.a = 0x88);
        cpu.step();
        assert_eq!(cpu.read(0x1234), 0x88);
        assert_eq!(cpu.cycles(), 5);
    }
}

#[test]
fn jmp_absolute_indirect_x() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x7c, 0x00, 0x30]);
        load(&mut cpu, 0x3004, &[0x34, 0x12]);
        with_regs(&mut cpu, |s| s.x = 0x04);
        cpu.step();
        assert_eq!(cpu.pc(), 0x1234);
        assert_eq!(cpu.cycles(), 6);
    }
}

#[test]
fn bra() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x80, 0x10]);
        cpu.step();
        assert_eq!(cpu.pc(), 0x0412);
        assert_eq!(cpu.cycles(), 3);
    }
}

#[test]
fn bit_immediate_only_z() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x89, 0xff]);
        with_regs(&mut cpu, |s| {
            s.a = 0x00;
            s.p = 0xe0; // N and V preset
        });
        cpu.step();
        assert_eq!(cpu.state().p, 0xe2);
        assert_eq!(cpu.cycles(), 2);
    }
}

#[test]
fn bit_absx() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x3c, 0x00, 0x20]);
        cpu.write(0x2002, 0xc0);
        with_regs(&mut cpu, |s| {
            s.a = 0x01;
            s.x = 0x02;
        });
        cpu.step();
        let p = cpu.state().p;
        assert_ne!(p & 0x80, 0);
        assert_ne!(p & 0x40, 0);
        assert_ne!(p & 0x02, 0);
        assert_eq!(cpu.cycles(), 4);
    }
}

#[test]
fn inc_dec_accumulator() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x1a, 0x3a, 0x3a]);
        cpu.step_n(3);
        let state = cpu.state();
        assert_eq!(state.a, 0xff);
        assert_ne!(state.p & 0x80, 0);
        assert_eq!(state.cycles, 6);
    }
}

#[test]
fn rockwell_bit_ops() {
    for flavor in cmos_flavors() {
        let mut cpu = cpu_with_prog(flavor, &[0x07, 0x10]); // RMB0 $10
        cpu.write(0x0010, 0xff);
        cpu.step();
        assert_eq!(cpu.read(0x0010), 0xfe);
        assert_eq!(cpu.cycles(), 5);

        let mut cpu = cpu_with_prog(flavor, &[0xf7, 0x10]); // SMB7 $10
        cpu.step();
        assert_eq!(cpu.read(0x0010), 0x80);
        assert_eq!(cpu.cycles(), 5);
    }
}

#[test]
fn rockwell_bit_branches() {
    for flavor in cmos_flavors() {
        // BBR0 with bit 0 clear: taken.
        let mut cpu = cpu_with_prog(flavor, &[0x0f, 0x10, 0x02]);
        cpu.write(0x0010, 0xfe);
        cpu.step();
        assert_eq!(cpu.pc(), 0x0405);
        assert_eq!(cpu.cycles(), 6);

        // BBS0 with bit 0 clear: not taken.
        let mut cpu = cpu_with_prog(flavor, &[0x8f, 0x10, 0x02]);
        cpu.write(0x0010, 0xfe);
        cpu.step();
        assert_eq!(cpu.pc(), 0x0403);
        assert_eq!(cpu.cycles(), 5);
    }
}

#[test]
fn step_cycles_overshoots_by_last_instruction() {
    let prog = [0xa9, 0x01, 0x8d, 0x00, 0x20, 0xea]; // 2 + 4 + 2
    for flavor in all_flavors() {
        let mut cpu = cpu_with_prog(flavor, &prog);
        cpu.step_cycles(3);
        // Finishes the STA even though the budget ran out inside it.
        assert_eq!(cpu.cycles(), 6);
        assert_eq!(cpu.pc(), 0x0405);
    }
}

#[test]
fn step_n_with_halts_on_true() {
    let mut cpu = cpu_with_prog(Flavor::Nmos6502, &[0xea, 0xea, 0xea, 0xea]);
    let mut seen = 0;
    cpu.step_n_with(10, |_| {
        seen += 1;
        seen == 2
    });
    assert_eq!(seen, 2);
    assert_eq!(cpu.pc(), 0x0402);
}

#[test]
fn step_cycles_with_halts_on_true() {
    let mut cpu = cpu_with_prog(Flavor::Nmos6502, &[0xea, 0xea, 0xea, 0xea]);
    cpu.step_cycles_with(100, |c| c.pc() >= 0x0403);
    assert_eq!(cpu.pc(), 0x0403);
    assert_eq!(cpu.cycles(), 6);
}
