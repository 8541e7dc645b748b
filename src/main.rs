use bigint::BigInt;

fn main() {
    let from_blocks = BigInt::from_blocks(&[123, 456, 789]);
    println!("from blocks: {}", from_blocks);

    let dec: BigInt = "1234567890987654321".parse().expect("literal parses");
    let bin = BigInt::from_str_radix("1010101010101010101", 2).expect("literal parses");
    let hex = BigInt::from_str_radix("1234567890123456789", 16).expect("literal parses");
    println!("base 10: {}", dec);
    println!("base 2:  {}", bin);
    println!("base 16: {}", hex);

    let x: BigInt = "123456789012345".parse().expect("literal parses");
    let y: BigInt = "45678904567".parse().expect("literal parses");
    println!("x + y = {}", x + y);
    println!("x - y = {}", x - y);
    println!("x * y = {}", x * y);
    println!("x / y = {}", x / y);
    println!("x % y = {}", x % y);
    println!("x > y: {}, x == y: {}", x > y, x == y);

    let mut z: BigInt = "34567890987654".parse().expect("literal parses");
    println!("z.inc() = {}", z.inc());
    println!("z.inc_post() = {}, then z = {}", z.inc_post(), z);
    println!("z.dec() = {}", z.dec());

    let p: BigInt = "100000000000000000000".parse().expect("literal parses");
    let q = p + BigInt::ONE;
    println!("p & q = {}", p & q);
    println!("p | q = {}", p | q);
    println!("p ^ q = {}", p ^ q);
    println!("!p = {}", !p);
    println!("p & -p = {}", p & -p);

    println!("p << 2 = {}", p << 2);
    println!("p >> 1 = {}", p >> 1);
    println!("-p >> 1 = {}", -p >> 1);

    let small = BigInt::from(42);
    println!("42 + (-42) = {}", small + -small);
    println!("42 & (-42) = {}", small & -small);
    println!("42 ^ (-42) = {}", small ^ -small);
}
