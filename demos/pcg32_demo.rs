// Copyright 2018-2023 Developers of the Rand project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Prints a few rounds of 32-bit numbers, coin tosses and a shuffled deck.
//!
//! Usage: pcg32-demo [--rounds N] [-r] [--global]
//!
//! `-r` seeds from OS entropy (with the round count as the stream) instead of
//! the fixed seed (42, 54); `--global` draws from the process-wide generator.

use std::env;
use std::mem;
use std::process;

use pcg_basic::rand_core::{OsRng, RngCore};
use pcg_basic::{Error, GlobalRng, Pcg32};

const SUITS: u32 = 4;
const NUMBERS: u32 = 13;
const CARDS: u32 = 52;

struct Options {
    rounds: u64,
    nondeterministic: bool,
    global: bool,
}

fn print_usage(cmd: &str) {
    println!("Usage: {} [--rounds N] [-r] [--global]", cmd);
}

fn parse_args() -> Option<Options> {
    let mut opts = Options { rounds: 5, nondeterministic: false, global: false };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-r" => opts.nondeterministic = true,
            "--global" => opts.global = true,
            "--rounds" => opts.rounds = args.next()?.parse().ok()?,
            _ => match arg.strip_prefix("--rounds=") {
                Some(n) => opts.rounds = n.parse().ok()?,
                None => return None,
            },
        }
    }
    Some(opts)
}

fn main() {
    let opts = match parse_args() {
        Some(opts) => opts,
        None => {
            let cmd = env::args().next().unwrap_or_else(|| "pcg32-demo".into());
            print_usage(&cmd);
            process::exit(2);
        }
    };

    let (initstate, initseq) = if opts.nondeterministic {
        (OsRng.next_u64(), opts.rounds)
    } else {
        (42, 54)
    };

    println!("pcg32_random_r:");
    println!("      -  result:      32-bit unsigned int (u32)");
    println!("      -  period:      2^64   (* 2^63 streams)");
    println!("      -  state type:  Pcg32 ({} bytes)", mem::size_of::<Pcg32>());
    println!("      -  output func: XSH-RR");
    println!();

    let result = if opts.global {
        GlobalRng::with(|rng| {
            rng.seed(initstate, initseq);
            run(rng, opts.rounds)
        })
    } else {
        run(&mut Pcg32::new(initstate, initseq), opts.rounds)
    };
    if let Err(err) = result {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(rng: &mut Pcg32, rounds: u64) -> Result<(), Error> {
    for round in 1..=rounds {
        println!("Round {}:", round);

        // Make some 32-bit numbers
        print!("  32bit:");
        for _ in 0..6 {
            print!(" 0x{:08x}", rng.next_u32());
        }
        println!();

        // Toss some coins
        print!("  Coins: ");
        for _ in 0..65 {
            print!("{}", if rng.bounded_u32(2)? == 0 { 'H' } else { 'T' });
        }
        println!();

        // Deal some cards
        let mut cards: Vec<u32> = (0..CARDS).collect();
        for i in (2..=CARDS).rev() {
            let chosen = rng.bounded_u32(i)?;
            cards.swap(chosen as usize, (i - 1) as usize);
        }

        const NUMBER: [char; NUMBERS as usize] =
            ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];
        const SUIT: [char; SUITS as usize] = ['h', 'c', 'd', 's'];

        print!("  Cards:");
        for (i, &card) in cards.iter().enumerate() {
            print!(" {}{}", NUMBER[(card / SUITS) as usize], SUIT[(card % SUITS) as usize]);
            if (i + 1) % 22 == 0 {
                print!("\n\t");
            }
        }
        println!();
        println!();
    }
    Ok(())
}
