use console::style;
use sport_config::{ChipFamily, Register, SportInstance};
use sport_config::divisor::{frame_rate_hz, serial_clock_hz};
use sport_config::field::ClockSource;
use sport_config::register::{DmaCfg, SportCtl, SportDiv, SportMctl};

pub fn dump_family(family: ChipFamily, sclk_hz: Option<u32>) {
    println!("Family\t{family} ({} halves)", family.half_count());

    for instance in family.instances() {
        dump_instance(instance, sclk_hz);
    }
}

pub fn dump_instance(instance: &SportInstance, sclk_hz: Option<u32>) {
    let id = instance.id;
    let image = &instance.image;
    let config = &instance.config;

    let state = if config.enabled {
        style("enabled").green()
    } else {
        style("unused").dim()
    };
    println!("SPORT {id}\t@ 0x{:08x} {state} {:?} {:?}", id.base_address(), config.mode, config.direction);

    println!("\t{:<4} 0x{:08x}  {:?}", Register::Ctl.name(),  image.ctl,  SportCtl::from(image.ctl));
    println!("\t{:<4} 0x{:08x}  {:?}", Register::Div.name(),  image.div,  SportDiv::from(image.div));
    println!("\t{:<4} 0x{:08x}  {:?}", Register::Mctl.name(), image.mctl, SportMctl::from(image.mctl));
    for (register, cs) in Register::CS.iter().zip(image.cs) {
        println!("\t{:<4} 0x{cs:08x}", register.name());
    }
    println!("\tDMA  0x{:08x}  {:?}", config.dma_cfg(), DmaCfg::from(config.dma_cfg()));
    println!("\t     bursts: memory {} B, peripheral {} B", config.dma.memory.bytes(), config.dma.peripheral.bytes());

    if let (Some(sclk_hz), true) = (sclk_hz, config.enabled) {
        let clock = &config.clock;
        let frame_sync = &config.frame_sync;
        if clock.source == ClockSource::Internal {
            println!("\tSPORT_CLK {} Hz, frame {} Hz",
                serial_clock_hz(sclk_hz, clock.divisor),
                frame_rate_hz(sclk_hz, clock.divisor, frame_sync.divisor));
        }
    }
}
