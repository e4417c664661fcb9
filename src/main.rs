use docopt::Docopt;
use error_chain::quick_main;
use log::{info, warn, LevelFilter};
use serde_derive::Deserialize;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use voxel_mazes::{
    generators::Recursion,
    grid_displays::{GridDisplay, PathDisplay, StartEndPointsDisplay},
    maze::{self, Algorithm, FixedPosition, MazeSpec},
    paint::{Coord3D, Material},
    renderers::CommandScriptRenderer,
    units::{Height, Length, Width},
};
use std::{
    fs::File,
    io,
    io::prelude::*,
    path::Path,
};

const USAGE: &str = "Voxel Mazes

Usage:
    voxel_mazes_driver -h | --help
    voxel_mazes_driver <width> <height> <length> <material> [--algorithm=<name>] [--recursion=<s>] [--seed=<n>] [--pos-x=<x>] [--pos-y=<y>] [--pos-z=<z>] [--commands-out=<path>] [--text-out=<path>] [--show-path] [--verbose]

Example:
    voxel_mazes_driver 11 2 11 stone

Arguments:
    <width>                 Maze width along x in blocks, an odd number.
    <height>                Wall height in blocks.
    <length>                Maze length along z in blocks, an odd number.
    <material>              The block the walls are made of.

Options:
    -h --help               Show this screen.
    --algorithm=<name>      binary-tree, recursive-backtracking or recursive-division [default: recursive-backtracking].
    --recursion=<s>         How the depth first generators recurse: auto, direct or stack [default: auto].
    --seed=<n>              Seed the random choices so a maze can be generated again.
    --pos-x=<x>             x coordinate of the position the maze is placed in front of [default: 0].
    --pos-y=<y>             y coordinate of the position the maze is placed in front of [default: 0].
    --pos-z=<z>             z coordinate of the position the maze is placed in front of [default: 0].
    --commands-out=<path>   Write the fill command script to a file instead of stdout.
    --text-out=<path>       Write a text picture of the maze to a file.
    --show-path             Mark the route from the entrance to the exit in the text picture.
    --verbose               Log each generation step.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    arg_width: usize,
    arg_height: usize,
    arg_length: usize,
    arg_material: String,
    flag_algorithm: String,
    flag_recursion: String,
    flag_seed: Option<u64>,
    flag_pos_x: i64,
    flag_pos_y: i64,
    flag_pos_z: i64,
    flag_commands_out: String,
    flag_text_out: String,
    flag_show_path: bool,
    flag_verbose: bool,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    // Result is a typedef of std `Result` with the error type our own `Error`
    // Defines the From conversions that let try! and ? work for our `Error`.
    // ResultExt adds the `chain_err` trait method.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::voxel_mazes::errors::Error, ::voxel_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Logger(::log::SetLoggerError);
        }
    }
}
use crate::errors::*;

// Failures are printed as their error chain with exit status 1.
quick_main!(run);

fn parse_args<I, S>(argv: I) -> ::std::result::Result<MazeArgs, docopt::Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
}

fn run() -> Result<()> {

    // Help, version and usage errors print themselves and exit.
    let args = parse_args(std::env::args()).unwrap_or_else(|e| e.exit());

    init_logging(args.flag_verbose)?;

    let spec = maze_spec_from_args(&args)?;
    let mut position = FixedPosition(Coord3D::new(args.flag_pos_x, args.flag_pos_y, args.flag_pos_z));

    let maze = if args.flag_commands_out.is_empty() {
        let stdout = io::stdout();
        let mut script = CommandScriptRenderer::new(stdout.lock());
        maze::build_and_render(&spec, &mut position, &mut script)?
    } else {
        let file = File::create(Path::new(&args.flag_commands_out))
            .chain_err(|| format!("Failed to create command script file {}", args.flag_commands_out))?;
        let mut script = CommandScriptRenderer::new(io::BufWriter::new(file));
        let maze = maze::build_and_render(&spec, &mut position, &mut script)?;
        script.into_inner()
            .flush()
            .chain_err(|| format!("Failed to write command script file {}", args.flag_commands_out))?;
        maze
    };

    info!("{}", maze.summary());

    if !args.flag_text_out.is_empty() {
        let grid = maze.grid();
        let text = if args.flag_show_path {
            let display: Box<dyn GridDisplay> = if let Some(path) = maze.solution_path() {
                Box::new(PathDisplay::new(&path))
            } else {
                // Somehow there is no route, so just mark where it should start and end
                warn!("There is no route from the entrance to the exit to show");
                Box::new(StartEndPointsDisplay::new(grid.entrance(), grid.exit()))
            };
            format!("{}", grid.render_with(display.as_ref()))
        } else {
            format!("{}", grid)
        };
        write_text_to_file(&text, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level,
                     ConfigBuilder::new()
                         .set_target_level(LevelFilter::Off)
                         .set_location_level(LevelFilter::Off)
                         .build(),
                     TerminalMode::Stderr,
                     ColorChoice::Auto)?;
    Ok(())
}

fn maze_spec_from_args(args: &MazeArgs) -> Result<MazeSpec> {
    let algorithm = args.flag_algorithm.parse::<Algorithm>()?;
    let recursion = args.flag_recursion.parse::<Recursion>()?;

    Ok(MazeSpec::builder(Width(args.arg_width), Height(args.arg_height), Length(args.arg_length))
        .material(Material::block(args.arg_material.as_str()))
        .algorithm(algorithm)
        .recursion(recursion)
        .seed(args.flag_seed)
        .build())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let path = Path::new(file_name);
    let mut file = File::create(&path)?;
    file.write_all(data.as_bytes())?;
    Ok(())
}
