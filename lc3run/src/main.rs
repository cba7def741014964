#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup, ArgMatches};
use lc3run::{run_loaded, terminal_vm, Error};

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the object image to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Assembles and runs the given source file"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Records a register trace and prints it after the run"),
        )
        .arg(
            Arg::with_name("disassemble")
                .short("d")
                .long("disassemble")
                .help("Prints a listing of the image instead of running it"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .get_matches();

    if let Err(err) = lc3run_main(&matches) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn lc3run_main(matches: &ArgMatches) -> Result<(), Error> {
    let image = match matches.value_of("assembly") {
        Some(path) => {
            let source = std::fs::read_to_string(path)?;
            lc3asm::assemble_image(&source)?.1
        }
        None => lc3obj::read_file(matches.value_of("PROGRAM").unwrap())?,
    };

    if matches.is_present("disassemble") {
        print!("{}", lc3obj::disassemble(&image));
        return Ok(());
    }

    let mut vm = terminal_vm();
    vm.set_trace_enabled(matches.is_present("trace"));
    let vm = run_loaded(vm, &image)?;

    if matches.is_present("trace") {
        for snapshot in vm.traces() {
            println!("{:04X?}", snapshot);
        }
    }

    Ok(())
}
