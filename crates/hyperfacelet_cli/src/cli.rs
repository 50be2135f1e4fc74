use eyre::{Result, WrapErr};
use hyperfacelet::{
    Cube, CubeConfig, Direction, Face, OffsetMode, ScrambleParams, Twist, scramble,
};
use serde::Serialize;

/// Simulate layer twists on an NxNxN cube and print the stickers
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Twist a few layers of a cube, printing it after each step.
    Demo {
        #[command(flatten)]
        cube: CubeArgs,
    },
    /// Apply one twist to a solved cube and print the result.
    Twist {
        /// Face to twist around.
        #[arg(value_enum, ignore_case = true)]
        face: FaceArg,
        /// Layer to twist, counting from 0 at `face`.
        #[arg(short, long, default_value_t = 0)]
        layer: usize,
        /// Twist counterclockwise instead of clockwise.
        #[arg(long)]
        ccw: bool,

        #[command(flatten)]
        cube: CubeArgs,
    },
    /// Scramble a cube from a seed and print the twists and the result.
    Scramble {
        /// Random seed.
        #[arg(long)]
        seed: String,
        /// Number of twists.
        #[arg(long, default_value_t = hyperfacelet::DEFAULT_SCRAMBLE_LENGTH)]
        length: u32,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        cube: CubeArgs,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct CubeArgs {
    /// Number of layers along each axis.
    #[arg(short = 'n', long, default_value_t = 3, allow_negative_numbers = true)]
    size: i64,
    /// Move the touched strips on neighboring faces inward with the layer
    /// depth, instead of always using the outermost row or column.
    #[arg(long)]
    depth_offsets: bool,
}
impl CubeArgs {
    fn config(&self) -> Result<CubeConfig> {
        // Negative sizes are reported the same way as zero.
        let size = usize::try_from(self.size).unwrap_or(0);
        let offset_mode = match self.depth_offsets {
            true => OffsetMode::LayerDepth,
            false => OffsetMode::FixedEndpoint,
        };
        let config = CubeConfig { size, offset_mode };
        config
            .validate()
            .wrap_err_with(|| format!("bad cube size {}", self.size))?;
        Ok(config)
    }
}

/// Face name accepted on the command line.
#[derive(clap::ValueEnum, Debug, Copy, Clone)]
pub(crate) enum FaceArg {
    U,
    D,
    F,
    B,
    L,
    R,
}
impl From<FaceArg> for Face {
    fn from(value: FaceArg) -> Self {
        match value {
            FaceArg::U => Face::U,
            FaceArg::D => Face::D,
            FaceArg::F => Face::F,
            FaceArg::B => Face::B,
            FaceArg::L => Face::L,
            FaceArg::R => Face::R,
        }
    }
}

/// Twists shown by the `demo` subcommand.
const DEMO_TWISTS: [(&str, Twist); 4] = [
    (
        "rotating the front face clockwise",
        Twist::new(Face::F, 0, Direction::CW),
    ),
    (
        "rotating the right face counterclockwise",
        Twist::new(Face::R, 0, Direction::CCW),
    ),
    (
        "rotating the top face clockwise",
        Twist::new(Face::U, 0, Direction::CW),
    ),
    (
        "rotating the middle layer parallel to the left face clockwise",
        Twist::new(Face::L, 1, Direction::CW),
    ),
];

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Demo { cube } => {
            let mut cube = Cube::with_config(cube.config()?)?;
            println!("Initial cube state:");
            print!("{cube}");
            for (description, twist) in DEMO_TWISTS {
                cube.apply(twist)
                    .wrap_err_with(|| format!("error {description}"))?;
                println!("After {description}:");
                print!("{cube}");
            }
            Ok(())
        }

        Subcommand::Twist {
            face,
            layer,
            ccw,
            cube,
        } => {
            let direction = match ccw {
                true => Direction::CCW,
                false => Direction::CW,
            };
            let twist = Twist::new(face.into(), layer, direction);
            let mut cube = Cube::with_config(cube.config()?)?;
            cube.apply(twist)
                .wrap_err_with(|| format!("error applying twist {twist}"))?;
            print!("{cube}");
            Ok(())
        }

        Subcommand::Scramble {
            seed,
            length,
            json,
            cube,
        } => {
            let params = ScrambleParams { seed, length };
            let scrambled = scramble(params, cube.config()?)?;
            if json {
                write_json_output(&scrambled)?;
            } else {
                for twist in &scrambled.twists {
                    println!("{twist}");
                }
                println!();
                print!("{}", scrambled.cube);
            }
            Ok(())
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .wrap_err("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
