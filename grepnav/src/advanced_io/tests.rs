mod read_fluently {
    use std::io::{BufReader, Cursor, Seek, SeekFrom};
    use paste::paste;
    use spectral::prelude::*;
    use crate::advanced_io::advanced_buf_reader::BidirectionalBufRead;

    const TEXT: &str = "aaa\nbbb\n\ncd";

    macro_rules! test {
        ($name: ident, $start_from: literal, $n: literal, $expected: literal, $expected_position: literal) => {
            paste! {
                #[test]
                fn [< test_ $name >]() {
                    let mut reader = BufReader::new(Cursor::new(TEXT));
                    reader.seek(SeekFrom::Start($start_from))
                        .expect("Failed to move reader position");
                    let mut buf = Vec::new();
                    let result = reader.read_fluently($n, |chunk| buf.extend_from_slice(chunk));
                    assert_that!(result).is_ok().is_equal_to($expected.len() as u64);
                    assert_that!(String::from_utf8(buf).unwrap()).is_equal_to($expected.to_string());
                    assert_that!(reader.stream_position().unwrap()).is_equal_to($expected_position);
                }
            }
        };
    }

    test!(forward_from_start, 0, 3, "aaa", 3);
    test!(forward_in_the_middle, 2, 4, "a\nbb", 6);
    test!(forward_past_end, 9, 10, "cd", 11);
    test!(forward_at_end, 11, 5, "", 11);
    test!(forward_zero, 4, 0, "", 4);
    test!(backward_from_end, 11, -2, "cd", 9);
    test!(backward_in_the_middle, 6, -4, "a\nbb", 2);
    test!(backward_past_start, 2, -10, "aa", 0);
    test!(backward_at_start, 0, -3, "", 0);

    #[test]
    fn test_backward_blocks_cover_stream() {
        let text = "0123456789".repeat(2000);
        let mut reader = BufReader::new(Cursor::new(text.as_bytes()));
        reader.seek(SeekFrom::End(0)).unwrap();
        let mut blocks = vec![];
        loop {
            let mut block = vec![];
            let n = reader.read_fluently(-3000, |chunk| block.extend_from_slice(chunk)).unwrap();
            if n == 0 {
                break;
            }
            blocks.push(block);
        }
        blocks.reverse();
        assert_that!(blocks.concat()).is_equal_to(text.into_bytes());
    }
}

mod seek_to {
    use std::io::{BufReader, Cursor, Seek};
    use spectral::prelude::*;
    use crate::advanced_io::seek_to::SeekTo;

    #[test]
    fn test_seek_back_and_forth() {
        let mut reader = BufReader::new(Cursor::new("abcdef"));
        for pos in [4, 1, 1, 6, 0] {
            reader.seek_to(pos).unwrap();
            assert_that!(reader.stream_position().unwrap()).is_equal_to(pos);
        }
    }
}
