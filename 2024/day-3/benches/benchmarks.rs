use aoc2024_day_3::*;

fn main() {
    // Run registered benchmarks.
    divan::main();
}

#[divan::bench]
fn part1() {
    part1::process(divan::black_box(include_str!("../input1.txt"))).unwrap();
}

#[divan::bench]
fn part2() {
    part2::process(divan::black_box(include_str!("../input2.txt"))).unwrap();
}

mod recognizers {
    use super::*;

    const INPUT: &str = include_str!("../input2.txt");

    #[divan::bench]
    fn pipeline() -> usize {
        instructions(divan::black_box(INPUT.as_bytes())).count()
    }

    #[divan::bench]
    fn regex() -> usize {
        scanner::instructions(divan::black_box(INPUT.as_bytes()))
            .unwrap()
            .len()
    }

    #[divan::bench]
    fn chumsky() -> usize {
        combinator::instructions(divan::black_box(INPUT))
            .unwrap()
            .len()
    }
}
