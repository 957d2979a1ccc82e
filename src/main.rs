use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use tonal::{NoteLength, OctaveConvention, TimeSignature, TonalVector, parse_interval, parse_pitch};

fn required<'a>(matches: &'a ArgMatches, id: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .with_context(|| format!("Missing argument: {}", id))
}

fn pitch(matches: &ArgMatches, id: &str) -> Result<TonalVector> {
    let text = required(matches, id)?;
    parse_pitch(text).with_context(|| format!("Failed to parse pitch: {}", text))
}

fn interval(matches: &ArgMatches, id: &str) -> Result<TonalVector> {
    let text = required(matches, id)?;
    parse_interval(text).with_context(|| format!("Failed to parse interval: {}", text))
}

fn print_note(note: &TonalVector, convention: OctaveConvention) -> Result<()> {
    let view = note.note();
    println!("note:     {}", view.unicode_with(convention)?);
    println!("ascii:    {}", view.ascii_with(convention)?);
    println!("verbose:  {}", view.verbose()?);
    println!("lilypond: {}", view.ly_abs8ve()?);
    println!("solfege:  {} ({})", view.solfege(), view.function_name());
    println!("value:    {}", note.primitive());
    Ok(())
}

fn print_interval(interval: &TonalVector) -> Result<()> {
    let view = interval.interval();
    println!("interval:  {}", view.unicode()?);
    println!("name:      {}", view.name()?);
    println!("abbr:      {}", view.abbr()?);
    println!("halfsteps: {}", interval.signed_int());
    println!("value:     {}", interval.primitive());
    Ok(())
}

fn run_note(matches: &ArgMatches, convention: OctaveConvention) -> Result<()> {
    let note = pitch(matches, "pitch")?;
    print_note(&note, convention)?;
    if matches.contains_id("relative") {
        let previous = pitch(matches, "relative")?;
        println!(
            "relative: {}",
            note.note()
                .ly_rel8ve(Some(&previous))
                .context("Failed to render relative octave")?
        );
    }
    Ok(())
}

fn run_transpose(matches: &ArgMatches, convention: OctaveConvention) -> Result<()> {
    let note = pitch(matches, "pitch")?;
    let by = interval(matches, "interval")?;
    let result = if matches.get_flag("down") {
        note - by
    } else {
        note + by
    };
    let result = result.with_context(|| format!("Cannot transpose {} by {}", note, by))?;
    print_note(&result, convention)
}

fn run_distance(matches: &ArgMatches) -> Result<()> {
    let from = pitch(matches, "from")?;
    let to = pitch(matches, "to")?;
    let distance = from
        .distance(&to)
        .with_context(|| format!("Cannot measure from {} to {}", from, to))?;
    print_interval(&distance)
}

fn run_invert(matches: &ArgMatches) -> Result<()> {
    let value = interval(matches, "interval")?;
    let inverted = value
        .inversion()
        .with_context(|| format!("Cannot invert {}", value))?;
    print_interval(&inverted)
}

fn run_length(matches: &ArgMatches) -> Result<()> {
    let text = required(matches, "length")?;
    let mut length: NoteLength = text
        .parse()
        .with_context(|| format!("Failed to parse note length: {}", text))?;

    if let Some(&dots) = matches.get_one::<u32>("dots") {
        length = length
            .dot(dots)
            .with_context(|| format!("Cannot add {} dots to {}", dots, length))?;
    }
    if let Some(&tuplet_type) = matches.get_one::<i64>("tuplet") {
        length = NoteLength::tuplet_member(length, tuplet_type, 1)
            .context("Failed to build tuplet member")?;
    }

    println!("length: {}", length);
    match length.canonical() {
        Ok(form) => println!("written: {}", form),
        Err(e) => println!("written: none ({})", e),
    }
    Ok(())
}

fn run_timesig(matches: &ArgMatches) -> Result<()> {
    let text = required(matches, "signature")?;
    let mut signature: TimeSignature = text
        .parse()
        .with_context(|| format!("Failed to parse time signature: {}", text))?;

    if let Some(other) = matches.get_one::<String>("plus") {
        let other: TimeSignature = other
            .parse()
            .with_context(|| format!("Failed to parse time signature: {}", other))?;
        signature = signature + other;
    }

    println!("signature: {}", signature);
    println!("length:    {}", signature.as_note_length());
    Ok(())
}

fn main() -> Result<()> {
    let matches = Command::new("tonal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tonal arithmetic and rhythmic length calculator")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .help("Enable debug logging")
                .short('v')
                .long("verbose")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("c4")
                .help("Write middle C as C4 instead of C0")
                .long("c4")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("note")
                .about("Show the spellings of a pitch")
                .arg(
                    Arg::new("pitch")
                        .help("Pitch name (e.g. Bb3, F#, eis)")
                        .required(true)
                        .value_name("PITCH")
                        .index(1),
                )
                .arg(
                    Arg::new("relative")
                        .help("Previous note for LilyPond relative octave marks")
                        .long("relative")
                        .value_name("PITCH"),
                ),
        )
        .subcommand(
            Command::new("interval")
                .about("Describe an interval")
                .arg(
                    Arg::new("interval")
                        .help("Interval (e.g. P5, \"aug2, +1\", m6-1)")
                        .required(true)
                        .value_name("INTERVAL")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose a pitch by an interval")
                .arg(
                    Arg::new("pitch")
                        .required(true)
                        .value_name("PITCH")
                        .index(1),
                )
                .arg(
                    Arg::new("interval")
                        .required(true)
                        .value_name("INTERVAL")
                        .index(2),
                )
                .arg(
                    Arg::new("down")
                        .help("Transpose downward")
                        .long("down")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("distance")
                .about("Smallest interval between two pitches")
                .arg(Arg::new("from").required(true).value_name("PITCH").index(1))
                .arg(Arg::new("to").required(true).value_name("PITCH").index(2)),
        )
        .subcommand(
            Command::new("invert")
                .about("Invert an interval")
                .arg(
                    Arg::new("interval")
                        .required(true)
                        .value_name("INTERVAL")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("length")
                .about("Show how a note length is written")
                .arg(
                    Arg::new("length")
                        .help("Length in whole notes (e.g. 1/4, 7/16, 1/6)")
                        .required(true)
                        .value_name("LENGTH")
                        .index(1),
                )
                .arg(
                    Arg::new("dots")
                        .help("Add dots before describing")
                        .long("dots")
                        .value_name("COUNT")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("tuplet")
                        .help("Treat the length as one member of a tuplet of this type")
                        .long("tuplet")
                        .value_name("TYPE")
                        .value_parser(clap::value_parser!(i64)),
                ),
        )
        .subcommand(
            Command::new("timesig")
                .about("Show or add time signatures")
                .arg(
                    Arg::new("signature")
                        .help("Time signature (e.g. 6/8, 2+2+3/8)")
                        .required(true)
                        .value_name("SIGNATURE")
                        .index(1),
                )
                .arg(
                    Arg::new("plus")
                        .help("Add another time signature")
                        .long("plus")
                        .value_name("SIGNATURE"),
                ),
        )
        .get_matches();

    let Some((command, sub)) = matches.subcommand() else {
        anyhow::bail!("No command given");
    };

    // Global flags are read from the subcommand, where clap propagates them.
    let default_filter = if sub.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let convention = if sub.get_flag("c4") {
        OctaveConvention::MiddleC4
    } else {
        OctaveConvention::MiddleC0
    };

    match command {
        "note" => run_note(sub, convention),
        "interval" => print_interval(&interval(sub, "interval")?),
        "transpose" => run_transpose(sub, convention),
        "distance" => run_distance(sub),
        "invert" => run_invert(sub),
        "length" => run_length(sub),
        "timesig" => run_timesig(sub),
        _ => anyhow::bail!("Unknown command: {}", command),
    }
}
