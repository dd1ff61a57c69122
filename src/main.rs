extern crate sdl2;

use std::error::Error;
use std::fs;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

use clap::Parser;
use log::{error, info, trace, warn};

use chip8vm::display::Frame;
use chip8vm::{
    Chip8, KeyState, Quirks, Step, TickClock,
    CHIP8_DISPLAY_HEIGHT, CHIP8_DISPLAY_WIDTH, CHIP8_KEY_COUNT,
};

const SCANCODE_MAPPING: [Scancode; CHIP8_KEY_COUNT] = [
    Scancode::X,
    Scancode::Num1,Scancode::Num2,Scancode::Num3,
    Scancode::Q,Scancode::W,Scancode::E,
    Scancode::A,Scancode::S,Scancode::D,
    Scancode::Z,Scancode::C,
    Scancode::Num4,Scancode::R,Scancode::F,Scancode::V
];

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg()]
    file: String,

    #[arg(short, long, default_value_t=540, help="Instructions per second")]
    freq: u32,

    #[arg(long, default_value_t=800, help="Window width")]
    width: u32,

    #[arg(long, default_value_t=400, help="Window height")]
    height: u32,

    #[arg(short, long, default_value_t=false, help="COSMAC VIP semantics (affects shift, load/store and jump with offset)")]
    legacy: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    if args.width != args.height * 2 {
        warn!("running in an aspect ratio other than 2:1, display may look stretched");
    }

    // Load rom and create the VM
    let rom = fs::read(&args.file)
        .map_err(|err| format!("could not open file {}: {err}", args.file))?;

    let quirks = if args.legacy { Quirks::Legacy } else { Quirks::Modern };
    let mut chip8 = Chip8::from_rom(&rom, quirks, || -> u8 { rand::random::<u8>() })?;
    info!("running {} ({} bytes, {:?} quirks)", args.file, rom.len(), quirks);

    let interval_ns = (1e9 / args.freq.max(1) as f64) as u64;
    let mut last_step = Instant::now();
    let mut clock = TickClock::new();
    let mut keys: KeyState = [false; CHIP8_KEY_COUNT];

    // Init SDL2 and get a window
    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem.window("chip8vm", args.width, args.height)
        .position_centered()
        .build()?;

    let mut canvas = window.into_canvas().accelerated().build()?;
    canvas.set_draw_color(Color::RGB(0, 0, 0));
    canvas.clear();
    canvas.present();

    let mut event_pump = sdl_context.event_pump()?;

    // Main loop
    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit {..} |
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'running,
                _ => {}
            }
        }

        // Process input
        let keyboard_state = event_pump.keyboard_state();
        for (key, scancode) in SCANCODE_MAPPING.iter().enumerate() {
            keys[key] = keyboard_state.is_scancode_pressed(*scancode);
        }

        // Wait for a while to stick to processor frequency, holding space runs flat out
        if !keyboard_state.is_scancode_pressed(Scancode::Space) {
            let delta_ns = last_step.elapsed().as_nanos() as u64;
            let wait_ns = interval_ns.saturating_sub(delta_ns);
            std::thread::sleep(Duration::from_nanos(wait_ns));
        }

        // Timers count down at 60hz, whatever the instruction rate
        let delta_s = last_step.elapsed().as_secs_f64();
        last_step = Instant::now();
        for _ in 0..clock.advance(delta_s) {
            if chip8.tick() {
                info!("tone off");
            }
        }

        if chip8.step(&keys)? == Step::Blocked {
            trace!("waiting for a key");
        }

        if chip8.take_redraw() {
            present_frame(&mut canvas, chip8.display().frame(), args)?;
        }
    }

    Ok(())
}

fn present_frame(canvas: &mut WindowCanvas, frame: &Frame, args: &Args) -> Result<(), Box<dyn Error>> {
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    let spot_width: u32 = args.width / CHIP8_DISPLAY_WIDTH as u32;
    let spot_height: u32 = args.height / CHIP8_DISPLAY_HEIGHT as u32;
    canvas.set_draw_color(Color::GREEN);
    for (y, row) in frame.iter().enumerate() {
        for (x, &on) in row.iter().enumerate() {
            if on {
                let spot = Rect::new(
                    x as i32 * spot_width as i32, y as i32 * spot_height as i32,
                    spot_width, spot_height);
                canvas.fill_rect(spot)?;
            }
        }
    }

    canvas.present();
    Ok(())
}
