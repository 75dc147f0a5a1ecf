#![no_main]

use buffer::{BigEndian, Endian, LittleEndian, ReadView};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut view = ReadView::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of result-style reads.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        match op {
            0 => {
                let _ = view.try_read::<u8>();
            }
            1 => {
                let _ = view.try_read::<(BigEndian<u16>, LittleEndian<u32>, bool)>();
            }
            2 => {
                let _ = view.try_read_endian::<u64>(Endian::Big);
            }
            3 => {
                let mut out = [0u16; 5];
                let _ = view.try_read_range::<LittleEndian<u16>>(&mut out);
            }
            4 => {
                let _ = view.try_seek(usize::from(data[idx - 1]));
            }
            5 => {
                let position = usize::from(data[idx - 1]).wrapping_mul(usize::MAX / 255);
                let _ = buffer::try_read_at::<(u32, char)>(position, data);
            }
            _ => {
                let _ = view.try_read::<[BigEndian<char>; 2]>();
            }
        }
        assert!(view.position() <= data.len());
    }
});
