//! Big-values Huffman 码表数据 (ISO 11172-3 Table B.7).
//!
//! 每张表以 (码字, 码长) 两个数组按 (x, y) 行主序展开, `wrap` 为每行的
//! y 取值数. 表 4 与表 14 在标准中保留未用; 表 16-23 与 24-31 分别共用
//! 同一套码字, 仅 linbits 不同.

/// 各表的 linbits 位宽 (0 表示无 escape 扩展)
pub(crate) const LINBITS: [u32; 32] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 6, 8, 10, 13, 4, 5, 6, 7, 8, 9,
    11, 13,
];

/// 各表的最大取值数 (x 或 y 的上界; escape 表为 16)
pub(crate) const MAX_VALUE: [u32; 32] = [
    0, 2, 3, 3, 0, 4, 4, 6, 6, 6, 8, 8, 8, 16, 0, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16, 16,
    16, 16, 16, 16, 16,
];

const CODES_1: [u16; 4] = [0x0001, 0x0001, 0x0001, 0x0000];
const LENS_1: [u8; 4] = [1, 3, 2, 3];

const CODES_2: [u16; 9] = [
    0x0001, 0x0002, 0x0001, 0x0003, 0x0001, 0x0001, 0x0003, 0x0002, 0x0000,
];
const LENS_2: [u8; 9] = [1, 3, 6, 3, 3, 5, 5, 5, 6];

const CODES_3: [u16; 9] = [
    0x0003, 0x0002, 0x0001, 0x0001, 0x0001, 0x0001, 0x0003, 0x0002, 0x0000,
];
const LENS_3: [u8; 9] = [2, 2, 6, 3, 2, 5, 5, 5, 6];

const CODES_5: [u16; 16] = [
    0x0001, 0x0002, 0x0006, 0x0005, 0x0003, 0x0001, 0x0004, 0x0004, 0x0007, 0x0005, 0x0007,
    0x0001, 0x0006, 0x0001, 0x0001, 0x0000,
];
const LENS_5: [u8; 16] = [1, 3, 6, 7, 3, 3, 6, 7, 6, 6, 7, 8, 7, 6, 7, 8];

const CODES_6: [u16; 16] = [
    0x0007, 0x0003, 0x0005, 0x0001, 0x0006, 0x0002, 0x0003, 0x0002, 0x0005, 0x0004, 0x0004,
    0x0001, 0x0003, 0x0003, 0x0002, 0x0000,
];
const LENS_6: [u8; 16] = [3, 3, 5, 7, 3, 2, 4, 5, 4, 4, 5, 6, 6, 5, 6, 7];

const CODES_7: [u16; 36] = [
    0x0001, 0x0002, 0x000a, 0x0013, 0x0010, 0x000a, 0x0003, 0x0003, 0x0007, 0x000a, 0x0005,
    0x0003, 0x000b, 0x0004, 0x000d, 0x0011, 0x0008, 0x0004, 0x000c, 0x000b, 0x0012, 0x000f,
    0x000b, 0x0002, 0x0007, 0x0006, 0x0009, 0x000e, 0x0003, 0x0001, 0x0006, 0x0004, 0x0005,
    0x0003, 0x0002, 0x0000,
];
const LENS_7: [u8; 36] = [
    1, 3, 6, 8, 8, 9, 3, 4, 6, 7, 7, 8, 6, 5, 7, 8, 8, 9, 7, 7, 8, 9, 9, 9, 7, 7, 8, 9, 9, 10, 8,
    8, 9, 10, 10, 10,
];

const CODES_8: [u16; 36] = [
    0x0003, 0x0004, 0x0006, 0x0012, 0x000c, 0x0005, 0x0005, 0x0001, 0x0002, 0x0010, 0x0009,
    0x0003, 0x0007, 0x0003, 0x0005, 0x000e, 0x0007, 0x0003, 0x0013, 0x0011, 0x000f, 0x000d,
    0x000a, 0x0004, 0x000d, 0x0005, 0x0008, 0x000b, 0x0005, 0x0001, 0x000c, 0x0004, 0x0004,
    0x0001, 0x0001, 0x0000,
];
const LENS_8: [u8; 36] = [
    2, 3, 6, 8, 8, 9, 3, 2, 4, 8, 8, 8, 6, 4, 6, 8, 8, 9, 8, 8, 8, 9, 9, 10, 8, 7, 8, 9, 10, 10,
    9, 8, 9, 9, 11, 11,
];

const CODES_9: [u16; 36] = [
    0x0007, 0x0005, 0x0009, 0x000e, 0x000f, 0x0007, 0x0006, 0x0004, 0x0005, 0x0005, 0x0006,
    0x0007, 0x0007, 0x0006, 0x0008, 0x0008, 0x0008, 0x0005, 0x000f, 0x0006, 0x0009, 0x000a,
    0x0005, 0x0001, 0x000b, 0x0007, 0x0009, 0x0006, 0x0004, 0x0001, 0x000e, 0x0004, 0x0006,
    0x0002, 0x0006, 0x0000,
];
const LENS_9: [u8; 36] = [
    3, 3, 5, 6, 8, 9, 3, 3, 4, 5, 6, 8, 4, 4, 5, 6, 7, 8, 6, 5, 6, 7, 7, 8, 7, 6, 7, 7, 8, 9, 8,
    7, 8, 8, 9, 9,
];

const CODES_10: [u16; 64] = [
    0x0001, 0x0002, 0x000a, 0x0017, 0x0023, 0x001e, 0x000c, 0x0011, 0x0003, 0x0003, 0x0008,
    0x000c, 0x0012, 0x0015, 0x000c, 0x0007, 0x000b, 0x0009, 0x000f, 0x0015, 0x0020, 0x0028,
    0x0013, 0x0006, 0x000e, 0x000d, 0x0016, 0x0022, 0x002e, 0x0017, 0x0012, 0x0007, 0x0014,
    0x0013, 0x0021, 0x002f, 0x001b, 0x0016, 0x0009, 0x0003, 0x001f, 0x0016, 0x0029, 0x001a,
    0x0015, 0x0014, 0x0005, 0x0003, 0x000e, 0x000d, 0x000a, 0x000b, 0x0010, 0x0006, 0x0005,
    0x0001, 0x0009, 0x0008, 0x0007, 0x0008, 0x0004, 0x0004, 0x0002, 0x0000,
];
const LENS_10: [u8; 64] = [
    1, 3, 6, 8, 9, 9, 9, 10, 3, 4, 6, 7, 8, 9, 8, 8, 6, 6, 7, 8, 9, 10, 9, 9, 7, 7, 8, 9, 10, 10,
    9, 10, 8, 8, 9, 10, 10, 10, 10, 10, 9, 9, 10, 10, 11, 11, 10, 11, 8, 8, 9, 10, 10, 10, 11,
    11, 9, 8, 9, 10, 10, 11, 11, 11,
];

const CODES_11: [u16; 64] = [
    0x0003, 0x0000, 0x000c, 0x0046, 0x00a0, 0x0172, 0x00a1, 0x0173, 0x0002, 0x0003, 0x0004,
    0x001c, 0x00a2, 0x00a3, 0x0047, 0x00a4, 0x0005, 0x000d, 0x001d, 0x001e, 0x00a5, 0x00a6,
    0x00a7, 0x00a8, 0x001f, 0x0020, 0x0021, 0x0048, 0x00a9, 0x00aa, 0x00ab, 0x00ac, 0x0049,
    0x0022, 0x004a, 0x004b, 0x00ad, 0x0174, 0x00ae, 0x0175, 0x00af, 0x004c, 0x00b0, 0x00b1,
    0x00b2, 0x0176, 0x00b3, 0x0177, 0x00b4, 0x004d, 0x004e, 0x00b5, 0x0178, 0x0179, 0x017a,
    0x017b, 0x00b6, 0x004f, 0x00b7, 0x00b8, 0x017c, 0x017d, 0x017e, 0x017f,
];
const LENS_11: [u8; 64] = [
    2, 3, 5, 7, 8, 9, 8, 9, 4, 4, 4, 6, 8, 8, 7, 8, 4, 5, 6, 6,
    8, 8, 8, 8, 6, 6, 6, 7, 8, 8, 8, 8, 7, 6, 7, 7, 8, 9, 8, 9,
    8, 7, 8, 8, 8, 9, 8, 9, 8, 7, 7, 8, 9, 9, 9, 9, 8, 7, 8, 8,
    9, 9, 9, 9,
];

const CODES_12: [u16; 64] = [
    0x0009, 0x0006, 0x0010, 0x0021, 0x0029, 0x0027, 0x0026, 0x001a, 0x0007, 0x0005, 0x0006,
    0x0009, 0x0017, 0x0010, 0x001a, 0x000b, 0x0011, 0x0007, 0x000b, 0x000e, 0x0015, 0x001e,
    0x000a, 0x0007, 0x0011, 0x000a, 0x000f, 0x000c, 0x0012, 0x001c, 0x000e, 0x0004, 0x0020,
    0x000d, 0x0016, 0x0013, 0x0012, 0x0010, 0x0009, 0x0005, 0x0028, 0x0011, 0x001f, 0x001d,
    0x0011, 0x000d, 0x0005, 0x0002, 0x001b, 0x000c, 0x000b, 0x000f, 0x0001, 0x0007, 0x0004,
    0x0014, 0x001b, 0x000c, 0x0008, 0x000c, 0x0006, 0x0003, 0x0015, 0x0000,
];
const LENS_12: [u8; 64] = [
    4, 3, 5, 7, 8, 9, 9, 9, 3, 3, 4, 5, 7, 7, 8, 8, 5, 4, 5, 6,
    7, 8, 7, 8, 6, 5, 6, 6, 7, 8, 8, 8, 7, 6, 7, 7, 8, 8, 8, 9,
    8, 7, 8, 8, 8, 9, 8, 9, 8, 7, 7, 8, 9, 9, 9, 9, 9, 8, 8, 9,
    9, 9, 9, 9,
];

const CODES_13: [u16; 256] = [
    0x0001, 0x0005, 0x000e, 0x0015, 0x0022, 0x0033, 0x002e, 0x0047, 0x002a, 0x0034, 0x0044,
    0x0034, 0x0043, 0x002c, 0x002b, 0x0013, 0x0003, 0x0004, 0x000c, 0x0013, 0x001f, 0x001a,
    0x002c, 0x0021, 0x001f, 0x0018, 0x0020, 0x0018, 0x001f, 0x0023, 0x0016, 0x000e, 0x000f,
    0x000d, 0x0017, 0x0024, 0x003b, 0x0031, 0x004d, 0x0041, 0x001d, 0x0028, 0x001e, 0x0028,
    0x001b, 0x0021, 0x002a, 0x0010, 0x0016, 0x0014, 0x0025, 0x003d, 0x0038, 0x004f, 0x0049,
    0x0040, 0x002b, 0x004c, 0x0038, 0x0025, 0x001a, 0x001f, 0x0019, 0x000e, 0x0023, 0x0010,
    0x003c, 0x0039, 0x0061, 0x004b, 0x0072, 0x005b, 0x0036, 0x0049, 0x0037, 0x0029, 0x0030,
    0x0035, 0x0017, 0x0018, 0x003a, 0x001b, 0x0032, 0x0060, 0x004c, 0x0046, 0x005d, 0x0054,
    0x004d, 0x003a, 0x004f, 0x001d, 0x004a, 0x0031, 0x0029, 0x0011, 0x002f, 0x002d, 0x004e,
    0x004a, 0x0073, 0x005e, 0x005a, 0x004f, 0x0045, 0x0053, 0x0047, 0x0032, 0x003b, 0x0026,
    0x0024, 0x000f, 0x0048, 0x0022, 0x0038, 0x005f, 0x005c, 0x0055, 0x005b, 0x005a, 0x0056,
    0x0049, 0x004d, 0x0041, 0x0033, 0x002c, 0x002b, 0x002a, 0x002b, 0x0014, 0x001e, 0x002c,
    0x0037, 0x004e, 0x0048, 0x0057, 0x004e, 0x003d, 0x002e, 0x0036, 0x0025, 0x001e, 0x0014,
    0x0010, 0x0035, 0x0019, 0x0029, 0x0025, 0x002c, 0x003b, 0x0036, 0x0051, 0x0042, 0x004c,
    0x0039, 0x0036, 0x0025, 0x0012, 0x0027, 0x000b, 0x0023, 0x0021, 0x001f, 0x0039, 0x002a,
    0x0052, 0x0048, 0x0050, 0x002f, 0x003a, 0x0037, 0x0015, 0x0016, 0x001a, 0x0026, 0x0016,
    0x0035, 0x0019, 0x0017, 0x0026, 0x0046, 0x003c, 0x0033, 0x0024, 0x0037, 0x001a, 0x0022,
    0x0017, 0x001b, 0x000e, 0x0009, 0x0007, 0x0022, 0x0020, 0x001c, 0x0027, 0x0031, 0x004b,
    0x001e, 0x0034, 0x0030, 0x0028, 0x0034, 0x001c, 0x0012, 0x0011, 0x0009, 0x0005, 0x002d,
    0x0015, 0x0022, 0x0040, 0x0038, 0x0032, 0x0031, 0x002d, 0x001f, 0x0013, 0x000c, 0x000f,
    0x000a, 0x0007, 0x0006, 0x0003, 0x0030, 0x0017, 0x0014, 0x0027, 0x0024, 0x0023, 0x0035,
    0x0015, 0x0010, 0x0017, 0x000d, 0x000a, 0x0006, 0x0001, 0x0004, 0x0002, 0x0010, 0x000f,
    0x0011, 0x001b, 0x0019, 0x0014, 0x001d, 0x000b, 0x0011, 0x000c, 0x0010, 0x0008, 0x0001,
    0x0001, 0x0000, 0x0001,
];
const LENS_13: [u8; 256] = [
    1, 4, 6, 7, 8, 9, 9, 10, 9, 10, 11, 11, 12, 12, 13, 13, 3, 4, 6, 7, 8, 8, 9, 9, 9, 9, 10, 10,
    11, 12, 12, 12, 6, 6, 7, 8, 9, 9, 10, 10, 9, 10, 10, 11, 11, 12, 13, 13, 7, 7, 8, 9, 9, 10,
    10, 10, 10, 11, 11, 11, 11, 12, 13, 13, 8, 7, 9, 9, 10, 10, 11, 11, 10, 11, 11, 12, 12, 13,
    13, 14, 9, 8, 9, 10, 10, 10, 11, 11, 11, 11, 12, 11, 13, 13, 14, 14, 9, 9, 10, 10, 11, 11,
    11, 11, 11, 12, 12, 12, 13, 13, 14, 14, 10, 9, 10, 11, 11, 11, 12, 12, 12, 12, 13, 13, 13,
    14, 16, 16, 9, 8, 9, 10, 10, 11, 11, 12, 12, 12, 12, 13, 13, 14, 15, 15, 10, 9, 10, 10, 11,
    11, 11, 13, 12, 13, 13, 14, 14, 14, 16, 15, 10, 10, 10, 11, 11, 12, 12, 13, 12, 13, 14, 13,
    14, 15, 16, 17, 11, 10, 10, 11, 12, 12, 12, 12, 13, 13, 13, 14, 15, 15, 15, 16, 11, 11, 11,
    12, 12, 13, 12, 13, 14, 14, 15, 15, 15, 16, 16, 16, 12, 11, 12, 13, 13, 13, 14, 14, 14, 14,
    14, 15, 16, 15, 16, 16, 13, 12, 12, 13, 13, 13, 15, 14, 14, 17, 15, 15, 15, 17, 16, 16, 12,
    12, 13, 14, 14, 14, 15, 14, 15, 15, 16, 16, 19, 18, 19, 16,
];

const CODES_15: [u16; 256] = [
    0x0007, 0x000c, 0x0012, 0x0035, 0x002f, 0x004c, 0x007c, 0x006c, 0x0059, 0x007b, 0x006c,
    0x0077, 0x006b, 0x0051, 0x007a, 0x003f, 0x000d, 0x0005, 0x0010, 0x001b, 0x002e, 0x0024,
    0x003d, 0x0033, 0x002a, 0x0046, 0x0034, 0x0053, 0x0041, 0x0029, 0x003b, 0x0024, 0x0013,
    0x0011, 0x000f, 0x0018, 0x0029, 0x0022, 0x003b, 0x0030, 0x0028, 0x0040, 0x0032, 0x004e,
    0x003e, 0x0050, 0x0038, 0x0021, 0x001d, 0x001c, 0x0019, 0x002b, 0x0027, 0x003f, 0x0037,
    0x005d, 0x004c, 0x003b, 0x005d, 0x0048, 0x0036, 0x004b, 0x0032, 0x001d, 0x0034, 0x0016,
    0x002a, 0x0028, 0x0043, 0x0039, 0x005f, 0x004f, 0x0048, 0x0039, 0x0059, 0x0045, 0x0031,
    0x0042, 0x002e, 0x001b, 0x004d, 0x0025, 0x0023, 0x0042, 0x003a, 0x0034, 0x005b, 0x004a,
    0x003e, 0x0030, 0x004f, 0x003f, 0x005a, 0x003e, 0x0028, 0x0026, 0x007d, 0x0020, 0x003c,
    0x0038, 0x0032, 0x005c, 0x004e, 0x0041, 0x0037, 0x0057, 0x0047, 0x0033, 0x0049, 0x0033,
    0x0046, 0x001e, 0x006d, 0x0035, 0x0031, 0x005e, 0x0058, 0x004b, 0x0042, 0x007a, 0x005b,
    0x0049, 0x0038, 0x002a, 0x0040, 0x002c, 0x0015, 0x0019, 0x005a, 0x002b, 0x0029, 0x004d,
    0x0049, 0x003f, 0x0038, 0x005c, 0x004d, 0x0042, 0x002f, 0x0043, 0x0030, 0x0035, 0x0024,
    0x0014, 0x0047, 0x0022, 0x0043, 0x003c, 0x003a, 0x0031, 0x0058, 0x004c, 0x0043, 0x006a,
    0x0047, 0x0036, 0x0026, 0x0027, 0x0017, 0x000f, 0x006d, 0x0035, 0x0033, 0x002f, 0x005a,
    0x0052, 0x003a, 0x0039, 0x0030, 0x0048, 0x0039, 0x0029, 0x0017, 0x001b, 0x003e, 0x0009,
    0x0056, 0x002a, 0x0028, 0x0025, 0x0046, 0x0040, 0x0034, 0x002b, 0x0046, 0x0037, 0x002a,
    0x0019, 0x001d, 0x0012, 0x000b, 0x000b, 0x0076, 0x0044, 0x001e, 0x0037, 0x0032, 0x002e,
    0x004a, 0x0041, 0x0031, 0x0027, 0x0018, 0x0010, 0x0016, 0x000d, 0x000e, 0x0007, 0x005b,
    0x002c, 0x0027, 0x0026, 0x0022, 0x003f, 0x0034, 0x002d, 0x001f, 0x0034, 0x001c, 0x0013,
    0x000e, 0x0008, 0x0009, 0x0003, 0x007b, 0x003c, 0x003a, 0x0035, 0x002f, 0x002b, 0x0020,
    0x0016, 0x0025, 0x0018, 0x0011, 0x000c, 0x000f, 0x000a, 0x0002, 0x0001, 0x0047, 0x0025,
    0x0022, 0x001e, 0x001c, 0x0014, 0x0011, 0x001a, 0x0015, 0x0010, 0x000a, 0x0006, 0x0008,
    0x0006, 0x0002, 0x0000,
];
const LENS_15: [u8; 256] = [
    3, 4, 5, 7, 7, 8, 9, 9, 9, 10, 10, 11, 11, 11, 12, 13, 4, 3, 5, 6, 7, 7, 8, 8, 8, 9, 9, 10,
    10, 10, 11, 11, 5, 5, 5, 6, 7, 7, 8, 8, 8, 9, 9, 10, 10, 11, 11, 11, 6, 6, 6, 7, 7, 8, 8, 9,
    9, 9, 10, 10, 10, 11, 11, 11, 7, 6, 7, 7, 8, 8, 9, 9, 9, 9, 10, 10, 10, 11, 11, 11, 8, 7, 7,
    8, 8, 8, 9, 9, 9, 9, 10, 10, 11, 11, 11, 12, 9, 7, 8, 8, 8, 9, 9, 9, 9, 10, 10, 10, 11, 11,
    12, 12, 9, 8, 8, 9, 9, 9, 9, 10, 10, 10, 10, 10, 11, 11, 11, 12, 9, 8, 8, 9, 9, 9, 9, 10, 10,
    10, 10, 11, 11, 12, 12, 12, 9, 8, 9, 9, 9, 9, 10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 10, 9,
    9, 9, 10, 10, 10, 10, 10, 11, 11, 11, 11, 12, 13, 12, 10, 9, 9, 9, 10, 10, 10, 10, 11, 11,
    11, 11, 12, 12, 12, 13, 11, 10, 9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 12, 12, 13, 13, 11,
    10, 10, 10, 10, 11, 11, 11, 11, 12, 12, 12, 12, 12, 13, 13, 12, 11, 11, 11, 11, 11, 11, 11,
    12, 12, 12, 12, 13, 13, 12, 13, 12, 11, 11, 11, 11, 11, 11, 12, 12, 12, 12, 12, 13, 13, 13,
    13,
];

const CODES_16: [u16; 256] = [
    0x0001, 0x0002, 0x0010, 0x0056, 0x00c2, 0x00c3, 0x01b4, 0x01b5, 0x03ac, 0x03ad, 0x03ae,
    0x07ba, 0x07bb, 0x07bc, 0x0fc8, 0x00c4, 0x0000, 0x0003, 0x0011, 0x0028, 0x0057, 0x00c5,
    0x00c6, 0x00c7, 0x01b6, 0x01b7, 0x01b8, 0x03af, 0x07bd, 0x03b0, 0x07be, 0x0058, 0x0012,
    0x0013, 0x0029, 0x0059, 0x00c8, 0x00c9, 0x01b9, 0x01ba, 0x03b1, 0x01bb, 0x03b2, 0x03b3,
    0x03b4, 0x07bf, 0x07c0, 0x00ca, 0x005a, 0x002a, 0x005b, 0x00cb, 0x00cc, 0x01bc, 0x01bd,
    0x01be, 0x03b5, 0x03b6, 0x07c1, 0x07c2, 0x07c3, 0x0fc9, 0x0fca, 0x01bf, 0x00cd, 0x005c,
    0x00ce, 0x00cf, 0x01c0, 0x01c1, 0x03b7, 0x03b8, 0x03b9, 0x07c4, 0x07c5, 0x07c6, 0x0fcb,
    0x0fcc, 0x0fcd, 0x00d0, 0x00d1, 0x005d, 0x00d2, 0x00d3, 0x01c2, 0x03ba, 0x03bb, 0x07c7,
    0x03bc, 0x07c8, 0x07c9, 0x0fce, 0x0fcf, 0x0fd0, 0x1fda, 0x01c3, 0x01c4, 0x00d4, 0x00d5,
    0x01c5, 0x03bd, 0x03be, 0x03bf, 0x03c0, 0x07ca, 0x07cb, 0x07cc, 0x07cd, 0x0fd1, 0x0fd2,
    0x1fdb, 0x01c6, 0x01c7, 0x00d6, 0x01c8, 0x01c9, 0x03c1, 0x03c2, 0x03c3, 0x07ce, 0x07cf,
    0x0fd3, 0x0fd4, 0x0fd5, 0x0fd6, 0x3ff0, 0x3ff1, 0x01ca, 0x01cb, 0x01cc, 0x01cd, 0x03c4,
    0x03c5, 0x03c6, 0x07d0, 0x07d1, 0x0fd7, 0x0fd8, 0x0fd9, 0x0fda, 0x1fdc, 0x1fdd, 0x1fde,
    0x01ce, 0x03c7, 0x01cf, 0x01d0, 0x03c8, 0x03c9, 0x07d2, 0x07d3, 0x0fdb, 0x0fdc, 0x0fdd,
    0x0fde, 0x1fdf, 0x0fdf, 0x1fe0, 0x0fe0, 0x03ca, 0x03cb, 0x03cc, 0x01d1, 0x03cd, 0x07d4,
    0x07d5, 0x07d6, 0x07d7, 0x0fe1, 0x1fe1, 0x1fe2, 0x1fe3, 0x3ff2, 0x3ff3, 0x1fe4, 0x01d2,
    0x07d8, 0x03ce, 0x03cf, 0x03d0, 0x07d9, 0x07da, 0x0fe2, 0x1fe5, 0x1fe6, 0x1fe7, 0x1fe8,
    0x1fe9, 0x1fea, 0x0fe3, 0x1feb, 0x03d1, 0x07db, 0x07dc, 0x07dd, 0x07de, 0x07df, 0x0fe4,
    0x0fe5, 0x0fe6, 0x0fe7, 0x3ff4, 0x1fec, 0x1fed, 0x1fee, 0x1fef, 0x3ff5, 0x03d2, 0x1ff0,
    0x07e0, 0x07e1, 0x07e2, 0x0fe8, 0x0fe9, 0x1ff1, 0x1ff2, 0x1ff3, 0x3ff6, 0x3ff7, 0x3ff8,
    0x3ff9, 0x7ffc, 0x3ffa, 0x03d3, 0x0fea, 0x0feb, 0x03d4, 0x07e3, 0x1ff4, 0x1ff5, 0x0fec,
    0x1ff6, 0x1ff7, 0x3ffb, 0x7ffd, 0x3ffc, 0x7ffe, 0x3ffd, 0x7fff, 0x03d5, 0x00d7, 0x005e,
    0x005f, 0x00d8, 0x00d9, 0x01d3, 0x01d4, 0x01d5, 0x03d6, 0x03d7, 0x03d8, 0x03d9, 0x03da,
    0x03db, 0x03dc, 0x0060,
];
const LENS_16: [u8; 256] = [
    1, 4, 6, 8, 9, 9, 10, 10, 11, 11, 11, 12, 12, 12, 13, 9, 3, 4, 6, 7,
    8, 9, 9, 9, 10, 10, 10, 11, 12, 11, 12, 8, 6, 6, 7, 8, 9, 9, 10, 10,
    11, 10, 11, 11, 11, 12, 12, 9, 8, 7, 8, 9, 9, 10, 10, 10, 11, 11, 12, 12,
    12, 13, 13, 10, 9, 8, 9, 9, 10, 10, 11, 11, 11, 12, 12, 12, 13, 13, 13, 9,
    9, 8, 9, 9, 10, 11, 11, 12, 11, 12, 12, 13, 13, 13, 14, 10, 10, 9, 9, 10,
    11, 11, 11, 11, 12, 12, 12, 12, 13, 13, 14, 10, 10, 9, 10, 10, 11, 11, 11, 12,
    12, 13, 13, 13, 13, 15, 15, 10, 10, 10, 10, 11, 11, 11, 12, 12, 13, 13, 13, 13,
    14, 14, 14, 10, 11, 10, 10, 11, 11, 12, 12, 13, 13, 13, 13, 14, 13, 14, 13, 11,
    11, 11, 10, 11, 12, 12, 12, 12, 13, 14, 14, 14, 15, 15, 14, 10, 12, 11, 11, 11,
    12, 12, 13, 14, 14, 14, 14, 14, 14, 13, 14, 11, 12, 12, 12, 12, 12, 13, 13, 13,
    13, 15, 14, 14, 14, 14, 15, 11, 14, 12, 12, 12, 13, 13, 14, 14, 14, 15, 15, 15,
    15, 16, 15, 11, 13, 13, 11, 12, 14, 14, 13, 14, 14, 15, 16, 15, 16, 15, 16, 11,
    9, 8, 8, 9, 9, 10, 10, 10, 11, 11, 11, 11, 11, 11, 11, 8,
];

const CODES_24: [u16; 256] = [
    0x000f, 0x000d, 0x011c, 0x001e, 0x0074, 0x011d, 0x011e, 0x05d8, 0x029a, 0x05d9, 0x05da,
    0x05db, 0x05dc, 0x05dd, 0x17f8, 0x011f, 0x000e, 0x000c, 0x0002, 0x0003, 0x001f, 0x0075,
    0x0076, 0x0120, 0x0121, 0x0122, 0x029b, 0x029c, 0x029d, 0x029e, 0x029f, 0x0077, 0x0004,
    0x0005, 0x0006, 0x0020, 0x0021, 0x0078, 0x0079, 0x0123, 0x0124, 0x0125, 0x0126, 0x02a0,
    0x02a1, 0x02a2, 0x05de, 0x0022, 0x0023, 0x0007, 0x0024, 0x0025, 0x007a, 0x007b, 0x007c,
    0x0127, 0x0128, 0x0129, 0x012a, 0x02a3, 0x02a4, 0x02a5, 0x02a6, 0x0026, 0x007d, 0x0027,
    0x0028, 0x007e, 0x007f, 0x0080, 0x0081, 0x012b, 0x012c, 0x012d, 0x02a7, 0x02a8, 0x02a9,
    0x02aa, 0x05df, 0x0029, 0x012e, 0x002a, 0x0082, 0x0083, 0x0084, 0x0085, 0x012f, 0x0130,
    0x0131, 0x0132, 0x02ab, 0x02ac, 0x02ad, 0x02ae, 0x02af, 0x002b, 0x0133, 0x0086, 0x0087,
    0x0088, 0x0089, 0x0134, 0x0135, 0x0136, 0x0137, 0x02b0, 0x02b1, 0x02b2, 0x02b3, 0x02b4,
    0x05e0, 0x002c, 0x02b5, 0x008a, 0x0138, 0x0139, 0x013a, 0x013b, 0x013c, 0x013d, 0x02b6,
    0x02b7, 0x02b8, 0x02b9, 0x02ba, 0x02bb, 0x05e1, 0x002d, 0x02bc, 0x013e, 0x013f, 0x0140,
    0x0141, 0x0142, 0x0143, 0x0144, 0x0145, 0x02bd, 0x02be, 0x02bf, 0x02c0, 0x02c1, 0x05e2,
    0x002e, 0x05e3, 0x0146, 0x0147, 0x0148, 0x0149, 0x014a, 0x02c2, 0x02c3, 0x02c4, 0x02c5,
    0x02c6, 0x02c7, 0x02c8, 0x05e4, 0x05e5, 0x002f, 0x05e6, 0x02c9, 0x014b, 0x014c, 0x02ca,
    0x02cb, 0x02cc, 0x02cd, 0x02ce, 0x02cf, 0x02d0, 0x02d1, 0x05e7, 0x05e8, 0x05e9, 0x0030,
    0x05ea, 0x02d2, 0x02d3, 0x02d4, 0x02d5, 0x02d6, 0x02d7, 0x02d8, 0x02d9, 0x02da, 0x05eb,
    0x05ec, 0x05ed, 0x0bee, 0x0bef, 0x0031, 0x05ee, 0x02db, 0x02dc, 0x02dd, 0x02de, 0x02df,
    0x02e0, 0x02e1, 0x02e2, 0x05ef, 0x05f0, 0x0bf0, 0x0bf1, 0x0bf2, 0x0bf3, 0x0032, 0x05f1,
    0x02e3, 0x02e4, 0x02e5, 0x02e6, 0x02e7, 0x05f2, 0x05f3, 0x0bf4, 0x0bf5, 0x0bf6, 0x0bf7,
    0x17f9, 0x17fa, 0x17fb, 0x0033, 0x05f4, 0x02e8, 0x02e9, 0x02ea, 0x02eb, 0x05f5, 0x05f6,
    0x0bf8, 0x0bf9, 0x0bfa, 0x0bfb, 0x17fc, 0x17fd, 0x17fe, 0x17ff, 0x0034, 0x008b, 0x0035,
    0x0008, 0x0009, 0x000a, 0x000b, 0x000c, 0x000d, 0x000e, 0x0036, 0x0037, 0x0038, 0x008c,
    0x008d, 0x0039, 0x0000,
];
const LENS_24: [u8; 256] = [
    4, 4, 9, 7, 8, 9, 9, 11, 10, 11, 11, 11, 11, 11, 13, 9, 4, 4, 6, 6,
    7, 8, 8, 9, 9, 9, 10, 10, 10, 10, 10, 8, 6, 6, 6, 7, 7, 8, 8, 9,
    9, 9, 9, 10, 10, 10, 11, 7, 7, 6, 7, 7, 8, 8, 8, 9, 9, 9, 9, 10,
    10, 10, 10, 7, 8, 7, 7, 8, 8, 8, 8, 9, 9, 9, 10, 10, 10, 10, 11, 7,
    9, 7, 8, 8, 8, 8, 9, 9, 9, 9, 10, 10, 10, 10, 10, 7, 9, 8, 8, 8,
    8, 9, 9, 9, 9, 10, 10, 10, 10, 10, 11, 7, 10, 8, 9, 9, 9, 9, 9, 9,
    10, 10, 10, 10, 10, 10, 11, 7, 10, 9, 9, 9, 9, 9, 9, 9, 9, 10, 10, 10,
    10, 10, 11, 7, 11, 9, 9, 9, 9, 9, 10, 10, 10, 10, 10, 10, 10, 11, 11, 7,
    11, 10, 9, 9, 10, 10, 10, 10, 10, 10, 10, 10, 11, 11, 11, 7, 11, 10, 10, 10,
    10, 10, 10, 10, 10, 10, 11, 11, 11, 12, 12, 7, 11, 10, 10, 10, 10, 10, 10, 10,
    10, 11, 11, 12, 12, 12, 12, 7, 11, 10, 10, 10, 10, 10, 11, 11, 12, 12, 12, 12,
    13, 13, 13, 7, 11, 10, 10, 10, 10, 11, 11, 12, 12, 12, 12, 13, 13, 13, 13, 7,
    8, 7, 6, 6, 6, 6, 6, 6, 6, 7, 7, 7, 8, 8, 7, 5,
];

/// 取表号对应的 (码字表, 码长表, 每行宽度)
///
/// 表 0 无码字 (全零输出); 表 4/14 保留; 16-23 / 24-31 共用码字.
pub(crate) fn codebook(table_id: u8) -> Option<(&'static [u16], &'static [u8], usize)> {
    match table_id {
        1 => Some((&CODES_1, &LENS_1, 2)),
        2 => Some((&CODES_2, &LENS_2, 3)),
        3 => Some((&CODES_3, &LENS_3, 3)),
        5 => Some((&CODES_5, &LENS_5, 4)),
        6 => Some((&CODES_6, &LENS_6, 4)),
        7 => Some((&CODES_7, &LENS_7, 6)),
        8 => Some((&CODES_8, &LENS_8, 6)),
        9 => Some((&CODES_9, &LENS_9, 6)),
        10 => Some((&CODES_10, &LENS_10, 8)),
        11 => Some((&CODES_11, &LENS_11, 8)),
        12 => Some((&CODES_12, &LENS_12, 8)),
        13 => Some((&CODES_13, &LENS_13, 16)),
        15 => Some((&CODES_15, &LENS_15, 16)),
        16..=23 => Some((&CODES_16, &LENS_16, 16)),
        24..=31 => Some((&CODES_24, &LENS_24, 16)),
        _ => None,
    }
}

/// count1 区 Table A 的码字与码长, 以四元组符号 (v<<3|w<<2|x<<1|y) 索引
pub(crate) const COUNT1A_CODES: [u8; 16] = [1, 5, 4, 5, 6, 5, 4, 4, 7, 3, 6, 0, 7, 2, 3, 1];
pub(crate) const COUNT1A_LENS: [u8; 16] = [1, 4, 4, 5, 4, 6, 5, 6, 4, 5, 5, 6, 5, 6, 6, 6];
