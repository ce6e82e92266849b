use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::{env, error::Error};

/// The largest record arity for which laws are generated. Standard library impls of `PartialEq`
/// and `Debug` stop at twelve slots, and the laws compare records directly.
const MAX_ARITY: usize = 12;

fn main() -> Result<(), Box<dyn Error>> {
    // We auto-generate unit tests relating operations to one another for every record arity
    // within bounds, so that a mistake in any one inductive step is caught at every size.
    println!("cargo:rerun-if-changed=build.rs");

    // Open a file to write to it in the output directory for the build
    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("laws.rs");
    let mut f = File::create(&dest_path)?;

    // File header
    writeln!(f, "#[allow(unused_imports)] use crate::prelude::*;")?;
    writeln!(f)?;

    for sample in Sample::enumerate(1, MAX_ARITY) {
        sample.write_laws(&mut f)?;
    }
    Ok(())
}

/// A record literal of a given arity, whose slots cycle through a fixed set of `Copy` types so
/// that neighboring slots never share a type.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    arity: usize,
}

impl Sample {
    pub fn enumerate(min_arity: usize, max_arity: usize) -> impl Iterator<Item = Sample> {
        (min_arity..=max_arity).map(|arity| Sample { arity })
    }

    fn write_laws(self, f: &mut impl Write) -> std::io::Result<()> {
        let n = self.arity;
        writeln!(f, "#[test]")?;
        writeln!(f, "fn laws_of_arity_{}() {{", n)?;
        writeln!(f, "    let record = {};", self)?;

        // Rotation and reversal
        writeln!(f, "    assert_eq!(record.rotate_left().rotate_right(), record);")?;
        writeln!(f, "    assert_eq!(record.rotate_right().rotate_left(), record);")?;
        writeln!(
            f,
            "    assert_eq!(record{}, record);",
            ".rotate_left()".repeat(n)
        )?;
        writeln!(f, "    assert_eq!(record.reverse().reverse(), record);")?;
        writeln!(f, "    assert_eq!(record.reverse().front(), record.back());")?;

        // Swapping the ends twice
        writeln!(
            f,
            "    assert_eq!(record.elem_swap::<0, {last}>().elem_swap::<0, {last}>(), record);",
            last = n - 1
        )?;

        // Every split point, every insertion point
        for k in 0..=n {
            writeln!(f, "    {{")?;
            writeln!(f, "        let (front, back) = record.split::<{}>();", k)?;
            writeln!(f, "        assert_eq!(front.append(back), record);")?;
            writeln!(f, "        assert_eq!(back.prepend(front), record);")?;
            writeln!(f, "    }}")?;
            writeln!(
                f,
                "    assert_eq!(record.insert::<{k}, _>(\"new\").erase::<{k}>(), record);",
                k = k
            )?;
        }

        // Every chunk size which divides the arity
        for k in (1..=n).filter(|k| n % k == 0) {
            writeln!(
                f,
                "    assert_eq!(record.chunk::<{}>().flatten(), record);",
                k
            )?;
        }

        // Interleaving the two halves of an even record
        if n % 2 == 0 {
            writeln!(f, "    {{")?;
            writeln!(f, "        let (front, back) = record.split::<{}>();", n / 2)?;
            writeln!(
                f,
                "        assert_eq!(front.interleave(back).alternating_split(), (front, back));"
            )?;
            writeln!(f, "    }}")?;
        }

        writeln!(f, "}}")?;
        writeln!(f)?;
        Ok(())
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "(")?;
        for i in 0..self.arity {
            match i % 6 {
                0 => write!(f, "{}_u8", i)?,
                1 => write!(f, "{}_u16", i)?,
                2 => write!(f, "{}_i32", i)?,
                3 => write!(f, "{}_u64", i)?,
                4 => write!(f, "{:?}", char::from(b'a' + i as u8))?,
                _ => write!(f, "{}", i % 4 == 1)?,
            }
            if i + 1 < self.arity {
                write!(f, ", ")?;
            }
        }
        if self.arity == 1 {
            write!(f, ",")?;
        }
        write!(f, ")")?;
        Ok(())
    }
}
