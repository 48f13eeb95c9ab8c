//! Integration tests for the mirror animations

mod common;
use common::*;

use mirror_doorbell::colors::{self, OFF, WHITE};
use mirror_doorbell::notification::{POSITION_SPAN, TRAIL_DECAY};
use mirror_doorbell::{Animation, Comet, MIRROR_LEDS, Pulse, Zone};

fn render(animation: Animation, frame: u16) -> Zone<MIRROR_LEDS> {
    let mut zone = Zone::new();
    animation.render(frame, &mut zone);
    zone
}

#[test]
fn rainbow_gives_each_pixel_its_own_rotating_hue() {
    let zone = render(Animation::Rainbow, 0);
    for i in 0..MIRROR_LEDS {
        let expected = colors::hue_wheel((i * 65_536 / MIRROR_LEDS) as u16);
        assert_eq!(zone.get(i), Some(expected));
    }

    // One frame later every hue has moved by 0x0400
    let next = render(Animation::Rainbow, 1);
    assert_eq!(next.get(0), Some(colors::hue_wheel(0x0400)));
}

#[test]
fn theatre_chase_lights_every_third_pixel_white() {
    for frame in 0..12u16 {
        let phase = usize::from(frame / 2) % 3;
        let zone = render(Animation::TheatreChase, frame);
        for i in 0..MIRROR_LEDS {
            let expected = if i % 3 == phase { WHITE } else { OFF };
            assert_eq!(zone.get(i), Some(expected), "frame {} pixel {}", frame, i);
        }
    }
}

#[test]
fn theatre_chase_rainbow_uses_rainbow_hues_on_lit_pixels() {
    let frame = 7;
    let phase = usize::from(frame / 2) % 3;
    let chase = render(Animation::TheatreChaseRainbow, frame);
    let rainbow = render(Animation::Rainbow, frame);

    for i in 0..MIRROR_LEDS {
        if i % 3 == phase {
            assert_eq!(chase.get(i), rainbow.get(i));
        } else {
            assert_eq!(chase.get(i), Some(OFF));
        }
    }
}

#[test]
fn pulse_rises_then_falls_within_one_period() {
    let pulse = Pulse::for_frame_rate(20);
    let ramp_up = 10;
    let period = pulse.period();
    assert_eq!(period, 30);

    assert_eq!(pulse.brightness_at(0), 0);
    for frame in 1..=ramp_up {
        assert!(pulse.brightness_at(frame) > pulse.brightness_at(frame - 1));
    }
    for frame in ramp_up + 1..period {
        assert!(pulse.brightness_at(frame) < pulse.brightness_at(frame - 1));
    }
    assert!(pulse.brightness_at(period - 1) < 30);
}

#[test]
fn pulse_repeats_with_its_period() {
    let pulse = Pulse::for_frame_rate(20);
    for frame in 0..pulse.period() {
        assert_eq!(
            pulse.brightness_at(frame),
            pulse.brightness_at(frame + pulse.period())
        );
        assert_eq!(
            pulse.brightness_at(frame),
            pulse.brightness_at(frame + 7 * pulse.period())
        );
    }
}

#[test]
fn pulse_drives_only_the_white_channel() {
    let pulse = Pulse::for_frame_rate(20);
    let zone = render(Animation::PulseWhite(pulse), 10);
    for pixel in zone.as_slice() {
        assert_eq!(*pixel, colors::WHITE);
    }

    let zone = render(Animation::PulseWhite(pulse), 5);
    let expected = colors::gamma8(125);
    for pixel in zone.as_slice() {
        assert_eq!((pixel.red, pixel.green, pixel.blue), (0, 0, 0));
        assert_eq!(pixel.white, expected);
    }
}

#[test]
fn comet_index_stays_on_the_ring() {
    for origin in [0, 5, MIRROR_LEDS - 1] {
        let mut comet = Comet::<MIRROR_LEDS>::new(origin);
        let mut zone = Zone::new();
        for frame in 0..2_000u16 {
            comet.render(frame, &mut zone);
            assert!(comet.index() < MIRROR_LEDS);
            assert!(comet.position().abs() <= POSITION_SPAN / 2);
        }
    }
}

#[test]
fn unlit_trail_pixels_decay_by_the_fixed_factor() {
    let mut comet = Comet::<MIRROR_LEDS>::new(0);
    for _ in 0..300 {
        let before = *comet.trail();
        comet.step();
        let after = comet.trail();

        let mut relit = 0;
        for i in 0..MIRROR_LEDS {
            if approx_eq(after[i], 1.0) {
                relit += 1;
                continue;
            }
            assert!(approx_eq(after[i], before[i] * TRAIL_DECAY), "pixel {}", i);
            if before[i] > 0.0 {
                assert!(after[i] < before[i]);
            }
        }
        assert!(relit >= 1);
        assert!(approx_eq(after[comet.index()], 1.0));
    }
}

#[test]
fn consecutive_heads_are_joined_by_lit_pixels() {
    let n = MIRROR_LEDS as i32;
    let mut comet = Comet::<MIRROR_LEDS>::new(0);
    for _ in 0..300 {
        let from = comet.index() as i32;
        comet.step();
        let to = comet.index() as i32;

        let delta = (to - from + n / 2).rem_euclid(n) - n / 2;
        let mut i = from;
        for _ in 0..delta.abs() {
            i = (i + delta.signum()).rem_euclid(n);
            assert!(approx_eq(comet.trail()[i as usize], 1.0));
        }
    }
}

#[test]
fn fast_comet_bounces_off_both_sides_of_the_ring() {
    let n = MIRROR_LEDS as i32;
    let limit = POSITION_SPAN / 2;
    let mut comet = Comet::<MIRROR_LEDS>::with_velocity(0, 40);
    let (mut above, mut below) = (0, 0);

    for _ in 0..500 {
        let (x, v, from) = (comet.position(), comet.velocity(), comet.index() as i32);
        let v = v + if x > 0 { -1 } else { 1 };
        let unbounded = x + v;
        comet.step();

        if unbounded > limit {
            above += 1;
            assert_eq!(comet.position(), POSITION_SPAN - unbounded);
            assert_eq!(comet.velocity(), -v);
        } else if unbounded < -limit {
            below += 1;
            assert_eq!(comet.position(), -POSITION_SPAN - unbounded);
            assert_eq!(comet.velocity(), -v);
        } else {
            assert_eq!(comet.position(), unbounded);
        }
        assert!(comet.index() < MIRROR_LEDS);

        let to = comet.index() as i32;
        let delta = (to - from + n / 2).rem_euclid(n) - n / 2;
        let mut i = from;
        for _ in 0..delta.abs() {
            i = (i + delta.signum()).rem_euclid(n);
            assert!(approx_eq(comet.trail()[i as usize], 1.0));
        }
    }
    assert!(above > 0 && below > 0);
}

#[test]
fn comet_head_is_white_and_trail_is_dimmed_hue() {
    let mut comet = Comet::<MIRROR_LEDS>::new(0);
    let mut zone = Zone::new();
    comet.render(0, &mut zone);
    comet.render(1, &mut zone);
    comet.render(2, &mut zone);

    let head = comet.index();
    assert_eq!(zone.get(head), Some(WHITE));

    for i in 0..MIRROR_LEDS {
        if i == head {
            continue;
        }
        let expected = colors::hue_wheel(colors::pixel_hue(2, i, MIRROR_LEDS))
            .scale(comet.trail()[i]);
        assert_eq!(zone.get(i), Some(expected));
    }
}
