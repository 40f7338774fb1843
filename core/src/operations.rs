//! One function per instruction.
//!
//! The program counter already points at the next instruction by the time any
//! of these run, so jumps and calls are absolute and a skip is one more `+2`.

use crate::constants::{SPRITE_HEIGHT, SPRITE_SHEET_START};
use crate::error::Result;
use crate::keypad::Keypad;
use crate::state::{Mode, State};

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer.clear();
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<()> {
    state.registers.pc = state.stack.pop()?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, addr: u16) {
    state.registers.pc = addr;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, addr: u16) -> Result<()> {
    state.stack.push(state.registers.pc)?;
    state.registers.pc = addr;
    Ok(())
}

fn skip_if(state: &mut State, condition: bool) {
    if condition {
        state.registers.skip();
    }
}

/// if Vx == nn then pc += 2
pub fn ske(state: &mut State, x: u8, nn: u8) {
    let vx = state.registers.read(x);
    skip_if(state, vx == nn);
}

/// if Vx != nn then pc += 2
pub fn skne(state: &mut State, x: u8, nn: u8) {
    let vx = state.registers.read(x);
    skip_if(state, vx != nn);
}

/// if Vx == Vy then pc += 2
pub fn skre(state: &mut State, x: u8, y: u8) {
    let equal = state.registers.read(x) == state.registers.read(y);
    skip_if(state, equal);
}

/// if Vx != Vy then pc += 2
pub fn skrne(state: &mut State, x: u8, y: u8) {
    let equal = state.registers.read(x) == state.registers.read(y);
    skip_if(state, !equal);
}

/// Vx = nn
pub fn load(state: &mut State, x: u8, nn: u8) {
    state.registers.write(x, nn);
}

/// Vx += nn
/// Overflow wraps and leaves VF alone
pub fn add(state: &mut State, x: u8, nn: u8) {
    let res = state.registers.read(x).wrapping_add(nn);
    state.registers.write(x, res);
}

/// Vx = Vy
pub fn mv(state: &mut State, x: u8, y: u8) {
    let vy = state.registers.read(y);
    state.registers.write(x, vy);
}

/// Vx |= Vy
pub fn or(state: &mut State, x: u8, y: u8) {
    let res = state.registers.read(x) | state.registers.read(y);
    state.registers.write(x, res);
}

/// Vx &= Vy
pub fn and(state: &mut State, x: u8, y: u8) {
    let res = state.registers.read(x) & state.registers.read(y);
    state.registers.write(x, res);
}

/// Vx ^= Vy
pub fn xor(state: &mut State, x: u8, y: u8) {
    let res = state.registers.read(x) ^ state.registers.read(y);
    state.registers.write(x, res);
}

// The arithmetic operations below write VF after Vx so that the flag survives
// when x is F.

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.registers.read(x).overflowing_add(state.registers.read(y));
    state.registers.write(x, res);
    state.registers.set_flag(over);
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.registers.read(x).overflowing_sub(state.registers.read(y));
    state.registers.write(x, res);
    state.registers.set_flag(!under);
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.registers.read(y).overflowing_sub(state.registers.read(x));
    state.registers.write(x, res);
    state.registers.set_flag(!under);
}

/// Vx >>= 1; VF = the bit shifted out
pub fn shr(state: &mut State, x: u8) {
    let vx = state.registers.read(x);
    state.registers.write(x, vx >> 1);
    state.registers.set_flag(vx & 0x1 == 0x1);
}

/// Vx <<= 1; VF = the bit shifted out
pub fn shl(state: &mut State, x: u8) {
    let vx = state.registers.read(x);
    state.registers.write(x, vx << 1);
    state.registers.set_flag(vx & 0x80 == 0x80);
}

/// I = addr
pub fn loadi(state: &mut State, addr: u16) {
    state.registers.i = addr;
}

/// PC = V0 + addr
pub fn jumpi(state: &mut State, addr: u16) {
    state.registers.pc = addr + u16::from(state.registers.read(0x0));
}

/// Vx = rand_byte & nn
pub fn rand(state: &mut State, x: u8, nn: u8) {
    let rand_byte: u8 = rand::random();
    state.registers.write(x, rand_byte & nn);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs the n byte sprite at I onto the frame buffer at (Vx, Vy), wrapping at
/// the edges. VF is set if any lit pixel gets turned off and cleared otherwise.
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) -> Result<()> {
    let px = usize::from(state.registers.read(x));
    let py = usize::from(state.registers.read(y));
    let sprite = state
        .memory
        .read(usize::from(state.registers.i), usize::from(n))?;
    let collision = state.frame_buffer.draw_sprite(px, py, sprite);
    state.registers.set_flag(collision);
    state.draw_flag = true;
    Ok(())
}

/// if Vx.pressed then pc += 2
pub fn skpr(state: &mut State, keypad: &Keypad, x: u8) {
    let pressed = keypad.is_pressed(state.registers.read(x));
    skip_if(state, pressed);
}

/// if !Vx.pressed then pc += 2
pub fn skup(state: &mut State, keypad: &Keypad, x: u8) {
    let pressed = keypad.is_pressed(state.registers.read(x));
    skip_if(state, !pressed);
}

/// Vx = DT
pub fn moved(state: &mut State, x: u8) {
    state.registers.write(x, state.timers.delay);
}

/// await keypress for Vx
/// Only presses that happen from now on count.
pub fn keyd(state: &mut State, keypad: &mut Keypad, x: u8) {
    keypad.clear_press();
    state.mode = Mode::AwaitingKey { register: x };
}

/// DT = Vx
pub fn lddt(state: &mut State, x: u8) {
    state.timers.delay = state.registers.read(x);
}

/// ST = Vx
pub fn ldst(state: &mut State, x: u8) {
    state.timers.sound = state.registers.read(x);
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    let vx = u16::from(state.registers.read(x));
    state.registers.i = state.registers.i.wrapping_add(vx);
}

/// I = &SPRITE_SHEET[Vx]
/// Only the low nibble of Vx picks the glyph
pub fn ldspr(state: &mut State, x: u8) {
    let digit = u16::from(state.registers.read(x) & 0xF);
    state.registers.i = SPRITE_SHEET_START + digit * SPRITE_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
pub fn bcd(state: &mut State, x: u8) -> Result<()> {
    let vx = state.registers.read(x);
    let digits = [vx / 100, vx / 10 % 10, vx % 10];
    state.memory.write(usize::from(state.registers.i), &digits)
}

/// mem[I..=I+x] = V0..=Vx
/// I is left unchanged
pub fn stor(state: &mut State, x: u8) -> Result<()> {
    let i = usize::from(state.registers.i);
    state.memory.write(i, state.registers.range(x))
}

/// V0..=Vx = mem[I..=I+x]
/// I is left unchanged
pub fn read(state: &mut State, x: u8) -> Result<()> {
    let i = usize::from(state.registers.i);
    let data = state.memory.read(i, usize::from(x) + 1)?;
    state.registers.range_mut(x).copy_from_slice(data);
    Ok(())
}
