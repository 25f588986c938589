// Generated from UnicodeData.txt, Unicode 14.0.0. Do not edit by hand.

//
// DECOMPOSITIONS holds field 5 of every entry that has one, NAMES holds the
// names of the characters whose names the forward converter inspects: those
// with a <font> or <compat> decomposition and those in the Greek repertoire.
// Both tables are sorted by character.

pub(crate) static UNICODE_VERSION: &str = "14.0.0";

pub(crate) static DECOMPOSITIONS: &[(char, &str)] = &[
    ('\u{00A0}', "<noBreak> 0020"),
    ('\u{00A8}', "<compat> 0020 0308"),
    ('\u{00AA}', "<super> 0061"),
    ('\u{00AF}', "<compat> 0020 0304"),
    ('\u{00B2}', "<super> 0032"),
    ('\u{00B3}', "<super> 0033"),
    ('\u{00B4}', "<compat> 0020 0301"),
    ('\u{00B5}', "<compat> 03BC"),
    ('\u{00B8}', "<compat> 0020 0327"),
    ('\u{00B9}', "<super> 0031"),
    ('\u{00BA}', "<super> 006F"),
    ('\u{00BC}', "<fraction> 0031 2044 0034"),
    ('\u{00BD}', "<fraction> 0031 2044 0032"),
    ('\u{00BE}', "<fraction> 0033 2044 0034"),
    ('\u{00C0}', "0041 0300"),
    ('\u{00C1}', "0041 0301"),
    ('\u{00C2}', "0041 0302"),
    ('\u{00C3}', "0041 0303"),
    ('\u{00C4}', "0041 0308"),
    ('\u{00C5}', "0041 030A"),
    ('\u{00C7}', "0043 0327"),
    ('\u{00C8}', "0045 0300"),
    ('\u{00C9}', "0045 0301"),
    ('\u{00CA}', "0045 0302"),
    ('\u{00CB}', "0045 0308"),
    ('\u{00CC}', "0049 0300"),
    ('\u{00CD}', "0049 0301"),
    ('\u{00CE}', "0049 0302"),
    ('\u{00CF}', "0049 0308"),
    ('\u{00D1}', "004E 0303"),
    ('\u{00D2}', "004F 0300"),
    ('\u{00D3}', "004F 0301"),
    ('\u{00D4}', "004F 0302"),
    ('\u{00D5}', "004F 0303"),
    ('\u{00D6}', "004F 0308"),
    ('\u{00D9}', "0055 0300"),
    ('\u{00DA}', "0055 0301"),
    ('\u{00DB}', "0055 0302"),
    ('\u{00DC}', "0055 0308"),
    ('\u{00DD}', "0059 0301"),
    ('\u{00E0}', "0061 0300"),
    ('\u{00E1}', "0061 0301"),
    ('\u{00E2}', "0061 0302"),
    ('\u{00E3}', "0061 0303"),
    ('\u{00E4}', "0061 0308"),
    ('\u{00E5}', "0061 030A"),
    ('\u{00E7}', "0063 0327"),
    ('\u{00E8}', "0065 0300"),
    ('\u{00E9}', "0065 0301"),
    ('\u{00EA}', "0065 0302"),
    ('\u{00EB}', "0065 0308"),
    ('\u{00EC}', "0069 0300"),
    ('\u{00ED}', "0069 0301"),
    ('\u{00EE}', "0069 0302"),
    ('\u{00EF}', "0069 0308"),
    ('\u{00F1}', "006E 0303"),
    ('\u{00F2}', "006F 0300"),
    ('\u{00F3}', "006F 0301"),
    ('\u{00F4}', "006F 0302"),
    ('\u{00F5}', "006F 0303"),
    ('\u{00F6}', "006F 0308"),
    ('\u{00F9}', "0075 0300"),
    ('\u{00FA}', "0075 0301"),
    ('\u{00FB}', "0075 0302"),
    ('\u{00FC}', "0075 0308"),
    ('\u{00FD}', "0079 0301"),
    ('\u{00FF}', "0079 0308"),
    ('\u{0100}', "0041 0304"),
    ('\u{0101}', "0061 0304"),
    ('\u{0102}', "0041 0306"),
    ('\u{0103}', "0061 0306"),
    ('\u{0104}', "0041 0328"),
    ('\u{0105}', "0061 0328"),
    ('\u{0106}', "0043 0301"),
    ('\u{0107}', "0063 0301"),
    ('\u{0108}', "0043 0302"),
    ('\u{0109}', "0063 0302"),
    ('\u{010A}', "0043 0307"),
    ('\u{010B}', "0063 0307"),
    ('\u{010C}', "0043 030C"),
    ('\u{010D}', "0063 030C"),
    ('\u{010E}', "0044 030C"),
    ('\u{010F}', "0064 030C"),
    ('\u{0112}', "0045 0304"),
    ('\u{0113}', "0065 0304"),
    ('\u{0114}', "0045 0306"),
    ('\u{0115}', "0065 0306"),
    ('\u{0116}', "0045 0307"),
    ('\u{0117}', "0065 0307"),
    ('\u{0118}', "0045 0328"),
    ('\u{0119}', "0065 0328"),
    ('\u{011A}', "0045 030C"),
    ('\u{011B}', "0065 030C"),
    ('\u{011C}', "0047 0302"),
    ('\u{011D}', "0067 0302"),
    ('\u{011E}', "0047 0306"),
    ('\u{011F}', "0067 0306"),
    ('\u{0120}', "0047 0307"),
    ('\u{0121}', "0067 0307"),
    ('\u{0122}', "0047 0327"),
    ('\u{0123}', "0067 0327"),
    ('\u{0124}', "0048 0302"),
    ('\u{0125}', "0068 0302"),
    ('\u{0128}', "0049 0303"),
    ('\u{0129}', "0069 0303"),
    ('\u{012A}', "0049 0304"),
    ('\u{012B}', "0069 0304"),
    ('\u{012C}', "0049 0306"),
    ('\u{012D}', "0069 0306"),
    ('\u{012E}', "0049 0328"),
    ('\u{012F}', "0069 0328"),
    ('\u{0130}', "0049 0307"),
    ('\u{0132}', "<compat> 0049 004A"),
    ('\u{0133}', "<compat> 0069 006A"),
    ('\u{0134}', "004A 0302"),
    ('\u{0135}', "006A 0302"),
    ('\u{0136}', "004B 0327"),
    ('\u{0137}', "006B 0327"),
    ('\u{0139}', "004C 0301"),
    ('\u{013A}', "006C 0301"),
    ('\u{013B}', "004C 0327"),
    ('\u{013C}', "006C 0327"),
    ('\u{013D}', "004C 030C"),
    ('\u{013E}', "006C 030C"),
    ('\u{013F}', "<compat> 004C 00B7"),
    ('\u{0140}', "<compat> 006C 00B7"),
    ('\u{0143}', "004E 0301"),
    ('\u{0144}', "006E 0301"),
    ('\u{0145}', "004E 0327"),
    ('\u{0146}', "006E 0327"),
    ('\u{0147}', "004E 030C"),
    ('\u{0148}', "006E 030C"),
    ('\u{0149}', "<compat> 02BC 006E"),
    ('\u{014C}', "004F 0304"),
    ('\u{014D}', "006F 0304"),
    ('\u{014E}', "004F 0306"),
    ('\u{014F}', "006F 0306"),
    ('\u{0150}', "004F 030B"),
    ('\u{0151}', "006F 030B"),
    ('\u{0154}', "0052 0301"),
    ('\u{0155}', "0072 0301"),
    ('\u{0156}', "0052 0327"),
    ('\u{0157}', "0072 0327"),
    ('\u{0158}', "0052 030C"),
    ('\u{0159}', "0072 030C"),
    ('\u{015A}', "0053 0301"),
    ('\u{015B}', "0073 0301"),
    ('\u{015C}', "0053 0302"),
    ('\u{015D}', "0073 0302"),
    ('\u{015E}', "0053 0327"),
    ('\u{015F}', "0073 0327"),
    ('\u{0160}', "0053 030C"),
    ('\u{0161}', "0073 030C"),
    ('\u{0162}', "0054 0327"),
    ('\u{0163}', "0074 0327"),
    ('\u{0164}', "0054 030C"),
    ('\u{0165}', "0074 030C"),
    ('\u{0168}', "0055 0303"),
    ('\u{0169}', "0075 0303"),
    ('\u{016A}', "0055 0304"),
    ('\u{016B}', "0075 0304"),
    ('\u{016C}', "0055 0306"),
    ('\u{016D}', "0075 0306"),
    ('\u{016E}', "0055 030A"),
    ('\u{016F}', "0075 030A"),
    ('\u{0170}', "0055 030B"),
    ('\u{0171}', "0075 030B"),
    ('\u{0172}', "0055 0328"),
    ('\u{0173}', "0075 0328"),
    ('\u{0174}', "0057 0302"),
    ('\u{0175}', "0077 0302"),
    ('\u{0176}', "0059 0302"),
    ('\u{0177}', "0079 0302"),
    ('\u{0178}', "0059 0308"),
    ('\u{0179}', "005A 0301"),
    ('\u{017A}', "007A 0301"),
    ('\u{017B}', "005A 0307"),
    ('\u{017C}', "007A 0307"),
    ('\u{017D}', "005A 030C"),
    ('\u{017E}', "007A 030C"),
    ('\u{017F}', "<compat> 0073"),
    ('\u{01A0}', "004F 031B"),
    ('\u{01A1}', "006F 031B"),
    ('\u{01AF}', "0055 031B"),
    ('\u{01B0}', "0075 031B"),
    ('\u{01C4}', "<compat> 0044 017D"),
    ('\u{01C5}', "<compat> 0044 017E"),
    ('\u{01C6}', "<compat> 0064 017E"),
    ('\u{01C7}', "<compat> 004C 004A"),
    ('\u{01C8}', "<compat> 004C 006A"),
    ('\u{01C9}', "<compat> 006C 006A"),
    ('\u{01CA}', "<compat> 004E 004A"),
    ('\u{01CB}', "<compat> 004E 006A"),
    ('\u{01CC}', "<compat> 006E 006A"),
    ('\u{01CD}', "0041 030C"),
    ('\u{01CE}', "0061 030C"),
    ('\u{01CF}', "0049 030C"),
    ('\u{01D0}', "0069 030C"),
    ('\u{01D1}', "004F 030C"),
    ('\u{01D2}', "006F 030C"),
    ('\u{01D3}', "0055 030C"),
    ('\u{01D4}', "0075 030C"),
    ('\u{01D5}', "00DC 0304"),
    ('\u{01D6}', "00FC 0304"),
    ('\u{01D7}', "00DC 0301"),
    ('\u{01D8}', "00FC 0301"),
    ('\u{01D9}', "00DC 030C"),
    ('\u{01DA}', "00FC 030C"),
    ('\u{01DB}', "00DC 0300"),
    ('\u{01DC}', "00FC 0300"),
    ('\u{01DE}', "00C4 0304"),
    ('\u{01DF}', "00E4 0304"),
    ('\u{01E0}', "0226 0304"),
    ('\u{01E1}', "0227 0304"),
    ('\u{01E2}', "00C6 0304"),
    ('\u{01E3}', "00E6 0304"),
    ('\u{01E6}', "0047 030C"),
    ('\u{01E7}', "0067 030C"),
    ('\u{01E8}', "004B 030C"),
    ('\u{01E9}', "006B 030C"),
    ('\u{01EA}', "004F 0328"),
    ('\u{01EB}', "006F 0328"),
    ('\u{01EC}', "01EA 0304"),
    ('\u{01ED}', "01EB 0304"),
    ('\u{01EE}', "01B7 030C"),
    ('\u{01EF}', "0292 030C"),
    ('\u{01F0}', "006A 030C"),
    ('\u{01F1}', "<compat> 0044 005A"),
    ('\u{01F2}', "<compat> 0044 007A"),
    ('\u{01F3}', "<compat> 0064 007A"),
    ('\u{01F4}', "0047 0301"),
    ('\u{01F5}', "0067 0301"),
    ('\u{01F8}', "004E 0300"),
    ('\u{01F9}', "006E 0300"),
    ('\u{01FA}', "00C5 0301"),
    ('\u{01FB}', "00E5 0301"),
    ('\u{01FC}', "00C6 0301"),
    ('\u{01FD}', "00E6 0301"),
    ('\u{01FE}', "00D8 0301"),
    ('\u{01FF}', "00F8 0301"),
    ('\u{0200}', "0041 030F"),
    ('\u{0201}', "0061 030F"),
    ('\u{0202}', "0041 0311"),
    ('\u{0203}', "0061 0311"),
    ('\u{0204}', "0045 030F"),
    ('\u{0205}', "0065 030F"),
    ('\u{0206}', "0045 0311"),
    ('\u{0207}', "0065 0311"),
    ('\u{0208}', "0049 030F"),
    ('\u{0209}', "0069 030F"),
    ('\u{020A}', "0049 0311"),
    ('\u{020B}', "0069 0311"),
    ('\u{020C}', "004F 030F"),
    ('\u{020D}', "006F 030F"),
    ('\u{020E}', "004F 0311"),
    ('\u{020F}', "006F 0311"),
    ('\u{0210}', "0052 030F"),
    ('\u{0211}', "0072 030F"),
    ('\u{0212}', "0052 0311"),
    ('\u{0213}', "0072 0311"),
    ('\u{0214}', "0055 030F"),
    ('\u{0215}', "0075 030F"),
    ('\u{0216}', "0055 0311"),
    ('\u{0217}', "0075 0311"),
    ('\u{0218}', "0053 0326"),
    ('\u{0219}', "0073 0326"),
    ('\u{021A}', "0054 0326"),
    ('\u{021B}', "0074 0326"),
    ('\u{021E}', "0048 030C"),
    ('\u{021F}', "0068 030C"),
    ('\u{0226}', "0041 0307"),
    ('\u{0227}', "0061 0307"),
    ('\u{0228}', "0045 0327"),
    ('\u{0229}', "0065 0327"),
    ('\u{022A}', "00D6 0304"),
    ('\u{022B}', "00F6 0304"),
    ('\u{022C}', "00D5 0304"),
    ('\u{022D}', "00F5 0304"),
    ('\u{022E}', "004F 0307"),
    ('\u{022F}', "006F 0307"),
    ('\u{0230}', "022E 0304"),
    ('\u{0231}', "022F 0304"),
    ('\u{0232}', "0059 0304"),
    ('\u{0233}', "0079 0304"),
    ('\u{02B0}', "<super> 0068"),
    ('\u{02B1}', "<super> 0266"),
    ('\u{02B2}', "<super> 006A"),
    ('\u{02B3}', "<super> 0072"),
    ('\u{02B4}', "<super> 0279"),
    ('\u{02B5}', "<super> 027B"),
    ('\u{02B6}', "<super> 0281"),
    ('\u{02B7}', "<super> 0077"),
    ('\u{02B8}', "<super> 0079"),
    ('\u{02D8}', "<compat> 0020 0306"),
    ('\u{02D9}', "<compat> 0020 0307"),
    ('\u{02DA}', "<compat> 0020 030A"),
    ('\u{02DB}', "<compat> 0020 0328"),
    ('\u{02DC}', "<compat> 0020 0303"),
    ('\u{02DD}', "<compat> 0020 030B"),
    ('\u{02E0}', "<super> 0263"),
    ('\u{02E1}', "<super> 006C"),
    ('\u{02E2}', "<super> 0073"),
    ('\u{02E3}', "<super> 0078"),
    ('\u{02E4}', "<super> 0295"),
    ('\u{0340}', "0300"),
    ('\u{0341}', "0301"),
    ('\u{0343}', "0313"),
    ('\u{0344}', "0308 0301"),
    ('\u{0374}', "02B9"),
    ('\u{037A}', "<compat> 0020 0345"),
    ('\u{037E}', "003B"),
    ('\u{0384}', "<compat> 0020 0301"),
    ('\u{0385}', "00A8 0301"),
    ('\u{0386}', "0391 0301"),
    ('\u{0387}', "00B7"),
    ('\u{0388}', "0395 0301"),
    ('\u{0389}', "0397 0301"),
    ('\u{038A}', "0399 0301"),
    ('\u{038C}', "039F 0301"),
    ('\u{038E}', "03A5 0301"),
    ('\u{038F}', "03A9 0301"),
    ('\u{0390}', "03CA 0301"),
    ('\u{03AA}', "0399 0308"),
    ('\u{03AB}', "03A5 0308"),
    ('\u{03AC}', "03B1 0301"),
    ('\u{03AD}', "03B5 0301"),
    ('\u{03AE}', "03B7 0301"),
    ('\u{03AF}', "03B9 0301"),
    ('\u{03B0}', "03CB 0301"),
    ('\u{03CA}', "03B9 0308"),
    ('\u{03CB}', "03C5 0308"),
    ('\u{03CC}', "03BF 0301"),
    ('\u{03CD}', "03C5 0301"),
    ('\u{03CE}', "03C9 0301"),
    ('\u{03D0}', "<compat> 03B2"),
    ('\u{03D1}', "<compat> 03B8"),
    ('\u{03D2}', "<compat> 03A5"),
    ('\u{03D3}', "03D2 0301"),
    ('\u{03D4}', "03D2 0308"),
    ('\u{03D5}', "<compat> 03C6"),
    ('\u{03D6}', "<compat> 03C0"),
    ('\u{03F0}', "<compat> 03BA"),
    ('\u{03F1}', "<compat> 03C1"),
    ('\u{03F2}', "<compat> 03C2"),
    ('\u{03F4}', "<compat> 0398"),
    ('\u{03F5}', "<compat> 03B5"),
    ('\u{03F9}', "<compat> 03A3"),
    ('\u{0400}', "0415 0300"),
    ('\u{0401}', "0415 0308"),
    ('\u{0403}', "0413 0301"),
    ('\u{0407}', "0406 0308"),
    ('\u{040C}', "041A 0301"),
    ('\u{040D}', "0418 0300"),
    ('\u{040E}', "0423 0306"),
    ('\u{0419}', "0418 0306"),
    ('\u{0439}', "0438 0306"),
    ('\u{0450}', "0435 0300"),
    ('\u{0451}', "0435 0308"),
    ('\u{0453}', "0433 0301"),
    ('\u{0457}', "0456 0308"),
    ('\u{045C}', "043A 0301"),
    ('\u{045D}', "0438 0300"),
    ('\u{045E}', "0443 0306"),
    ('\u{0476}', "0474 030F"),
    ('\u{0477}', "0475 030F"),
    ('\u{04C1}', "0416 0306"),
    ('\u{04C2}', "0436 0306"),
    ('\u{04D0}', "0410 0306"),
    ('\u{04D1}', "0430 0306"),
    ('\u{04D2}', "0410 0308"),
    ('\u{04D3}', "0430 0308"),
    ('\u{04D6}', "0415 0306"),
    ('\u{04D7}', "0435 0306"),
    ('\u{04DA}', "04D8 0308"),
    ('\u{04DB}', "04D9 0308"),
    ('\u{04DC}', "0416 0308"),
    ('\u{04DD}', "0436 0308"),
    ('\u{04DE}', "0417 0308"),
    ('\u{04DF}', "0437 0308"),
    ('\u{04E2}', "0418 0304"),
    ('\u{04E3}', "0438 0304"),
    ('\u{04E4}', "0418 0308"),
    ('\u{04E5}', "0438 0308"),
    ('\u{04E6}', "041E 0308"),
    ('\u{04E7}', "043E 0308"),
    ('\u{04EA}', "04E8 0308"),
    ('\u{04EB}', "04E9 0308"),
    ('\u{04EC}', "042D 0308"),
    ('\u{04ED}', "044D 0308"),
    ('\u{04EE}', "0423 0304"),
    ('\u{04EF}', "0443 0304"),
    ('\u{04F0}', "0423 0308"),
    ('\u{04F1}', "0443 0308"),
    ('\u{04F2}', "0423 030B"),
    ('\u{04F3}', "0443 030B"),
    ('\u{04F4}', "0427 0308"),
    ('\u{04F5}', "0447 0308"),
    ('\u{04F8}', "042B 0308"),
    ('\u{04F9}', "044B 0308"),
    ('\u{0587}', "<compat> 0565 0582"),
    ('\u{0622}', "0627 0653"),
    ('\u{0623}', "0627 0654"),
    ('\u{0624}', "0648 0654"),
    ('\u{0625}', "0627 0655"),
    ('\u{0626}', "064A 0654"),
    ('\u{0675}', "<compat> 0627 0674"),
    ('\u{0676}', "<compat> 0648 0674"),
    ('\u{0677}', "<compat> 06C7 0674"),
    ('\u{0678}', "<compat> 064A 0674"),
    ('\u{06C0}', "06D5 0654"),
    ('\u{06C2}', "06C1 0654"),
    ('\u{06D3}', "06D2 0654"),
    ('\u{0929}', "0928 093C"),
    ('\u{0931}', "0930 093C"),
    ('\u{0934}', "0933 093C"),
    ('\u{0958}', "0915 093C"),
    ('\u{0959}', "0916 093C"),
    ('\u{095A}', "0917 093C"),
    ('\u{095B}', "091C 093C"),
    ('\u{095C}', "0921 093C"),
    ('\u{095D}', "0922 093C"),
    ('\u{095E}', "092B 093C"),
    ('\u{095F}', "092F 093C"),
    ('\u{09CB}', "09C7 09BE"),
    ('\u{09CC}', "09C7 09D7"),
    ('\u{09DC}', "09A1 09BC"),
    ('\u{09DD}', "09A2 09BC"),
    ('\u{09DF}', "09AF 09BC"),
    ('\u{0A33}', "0A32 0A3C"),
    ('\u{0A36}', "0A38 0A3C"),
    ('\u{0A59}', "0A16 0A3C"),
    ('\u{0A5A}', "0A17 0A3C"),
    ('\u{0A5B}', "0A1C 0A3C"),
    ('\u{0A5E}', "0A2B 0A3C"),
    ('\u{0B48}', "0B47 0B56"),
    ('\u{0B4B}', "0B47 0B3E"),
    ('\u{0B4C}', "0B47 0B57"),
    ('\u{0B5C}', "0B21 0B3C"),
    ('\u{0B5D}', "0B22 0B3C"),
    ('\u{0B94}', "0B92 0BD7"),
    ('\u{0BCA}', "0BC6 0BBE"),
    ('\u{0BCB}', "0BC7 0BBE"),
    ('\u{0BCC}', "0BC6 0BD7"),
    ('\u{0C48}', "0C46 0C56"),
    ('\u{0CC0}', "0CBF 0CD5"),
    ('\u{0CC7}', "0CC6 0CD5"),
    ('\u{0CC8}', "0CC6 0CD6"),
    ('\u{0CCA}', "0CC6 0CC2"),
    ('\u{0CCB}', "0CCA 0CD5"),
    ('\u{0D4A}', "0D46 0D3E"),
    ('\u{0D4B}', "0D47 0D3E"),
    ('\u{0D4C}', "0D46 0D57"),
    ('\u{0DDA}', "0DD9 0DCA"),
    ('\u{0DDC}', "0DD9 0DCF"),
    ('\u{0DDD}', "0DDC 0DCA"),
    ('\u{0DDE}', "0DD9 0DDF"),
    ('\u{0E33}', "<compat> 0E4D 0E32"),
    ('\u{0EB3}', "<compat> 0ECD 0EB2"),
    ('\u{0EDC}', "<compat> 0EAB 0E99"),
    ('\u{0EDD}', "<compat> 0EAB 0EA1"),
    ('\u{0F0C}', "<noBreak> 0F0B"),
    ('\u{0F43}', "0F42 0FB7"),
    ('\u{0F4D}', "0F4C 0FB7"),
    ('\u{0F52}', "0F51 0FB7"),
    ('\u{0F57}', "0F56 0FB7"),
    ('\u{0F5C}', "0F5B 0FB7"),
    ('\u{0F69}', "0F40 0FB5"),
    ('\u{0F73}', "0F71 0F72"),
    ('\u{0F75}', "0F71 0F74"),
    ('\u{0F76}', "0FB2 0F80"),
    ('\u{0F77}', "<compat> 0FB2 0F81"),
    ('\u{0F78}', "0FB3 0F80"),
    ('\u{0F79}', "<compat> 0FB3 0F81"),
    ('\u{0F81}', "0F71 0F80"),
    ('\u{0F93}', "0F92 0FB7"),
    ('\u{0F9D}', "0F9C 0FB7"),
    ('\u{0FA2}', "0FA1 0FB7"),
    ('\u{0FA7}', "0FA6 0FB7"),
    ('\u{0FAC}', "0FAB 0FB7"),
    ('\u{0FB9}', "0F90 0FB5"),
    ('\u{1026}', "1025 102E"),
    ('\u{10FC}', "<super> 10DC"),
    ('\u{1B06}', "1B05 1B35"),
    ('\u{1B08}', "1B07 1B35"),
    ('\u{1B0A}', "1B09 1B35"),
    ('\u{1B0C}', "1B0B 1B35"),
    ('\u{1B0E}', "1B0D 1B35"),
    ('\u{1B12}', "1B11 1B35"),
    ('\u{1B3B}', "1B3A 1B35"),
    ('\u{1B3D}', "1B3C 1B35"),
    ('\u{1B40}', "1B3E 1B35"),
    ('\u{1B41}', "1B3F 1B35"),
    ('\u{1B43}', "1B42 1B35"),
    ('\u{1D2C}', "<super> 0041"),
    ('\u{1D2D}', "<super> 00C6"),
    ('\u{1D2E}', "<super> 0042"),
    ('\u{1D30}', "<super> 0044"),
    ('\u{1D31}', "<super> 0045"),
    ('\u{1D32}', "<super> 018E"),
    ('\u{1D33}', "<super> 0047"),
    ('\u{1D34}', "<super> 0048"),
    ('\u{1D35}', "<super> 0049"),
    ('\u{1D36}', "<super> 004A"),
    ('\u{1D37}', "<super> 004B"),
    ('\u{1D38}', "<super> 004C"),
    ('\u{1D39}', "<super> 004D"),
    ('\u{1D3A}', "<super> 004E"),
    ('\u{1D3C}', "<super> 004F"),
    ('\u{1D3D}', "<super> 0222"),
    ('\u{1D3E}', "<super> 0050"),
    ('\u{1D3F}', "<super> 0052"),
    ('\u{1D40}', "<super> 0054"),
    ('\u{1D41}', "<super> 0055"),
    ('\u{1D42}', "<super> 0057"),
    ('\u{1D43}', "<super> 0061"),
    ('\u{1D44}', "<super> 0250"),
    ('\u{1D45}', "<super> 0251"),
    ('\u{1D46}', "<super> 1D02"),
    ('\u{1D47}', "<super> 0062"),
    ('\u{1D48}', "<super> 0064"),
    ('\u{1D49}', "<super> 0065"),
    ('\u{1D4A}', "<super> 0259"),
    ('\u{1D4B}', "<super> 025B"),
    ('\u{1D4C}', "<super> 025C"),
    ('\u{1D4D}', "<super> 0067"),
    ('\u{1D4F}', "<super> 006B"),
    ('\u{1D50}', "<super> 006D"),
    ('\u{1D51}', "<super> 014B"),
    ('\u{1D52}', "<super> 006F"),
    ('\u{1D53}', "<super> 0254"),
    ('\u{1D54}', "<super> 1D16"),
    ('\u{1D55}', "<super> 1D17"),
    ('\u{1D56}', "<super> 0070"),
    ('\u{1D57}', "<super> 0074"),
    ('\u{1D58}', "<super> 0075"),
    ('\u{1D59}', "<super> 1D1D"),
    ('\u{1D5A}', "<super> 026F"),
    ('\u{1D5B}', "<super> 0076"),
    ('\u{1D5C}', "<super> 1D25"),
    ('\u{1D5D}', "<super> 03B2"),
    ('\u{1D5E}', "<super> 03B3"),
    ('\u{1D5F}', "<super> 03B4"),
    ('\u{1D60}', "<super> 03C6"),
    ('\u{1D61}', "<super> 03C7"),
    ('\u{1D62}', "<sub> 0069"),
    ('\u{1D63}', "<sub> 0072"),
    ('\u{1D64}', "<sub> 0075"),
    ('\u{1D65}', "<sub> 0076"),
    ('\u{1D66}', "<sub> 03B2"),
    ('\u{1D67}', "<sub> 03B3"),
    ('\u{1D68}', "<sub> 03C1"),
    ('\u{1D69}', "<sub> 03C6"),
    ('\u{1D6A}', "<sub> 03C7"),
    ('\u{1D78}', "<super> 043D"),
    ('\u{1D9B}', "<super> 0252"),
    ('\u{1D9C}', "<super> 0063"),
    ('\u{1D9D}', "<super> 0255"),
    ('\u{1D9E}', "<super> 00F0"),
    ('\u{1D9F}', "<super> 025C"),
    ('\u{1DA0}', "<super> 0066"),
    ('\u{1DA1}', "<super> 025F"),
    ('\u{1DA2}', "<super> 0261"),
    ('\u{1DA3}', "<super> 0265"),
    ('\u{1DA4}', "<super> 0268"),
    ('\u{1DA5}', "<super> 0269"),
    ('\u{1DA6}', "<super> 026A"),
    ('\u{1DA7}', "<super> 1D7B"),
    ('\u{1DA8}', "<super> 029D"),
    ('\u{1DA9}', "<super> 026D"),
    ('\u{1DAA}', "<super> 1D85"),
    ('\u{1DAB}', "<super> 029F"),
    ('\u{1DAC}', "<super> 0271"),
    ('\u{1DAD}', "<super> 0270"),
    ('\u{1DAE}', "<super> 0272"),
    ('\u{1DAF}', "<super> 0273"),
    ('\u{1DB0}', "<super> 0274"),
    ('\u{1DB1}', "<super> 0275"),
    ('\u{1DB2}', "<super> 0278"),
    ('\u{1DB3}', "<super> 0282"),
    ('\u{1DB4}', "<super> 0283"),
    ('\u{1DB5}', "<super> 01AB"),
    ('\u{1DB6}', "<super> 0289"),
    ('\u{1DB7}', "<super> 028A"),
    ('\u{1DB8}', "<super> 1D1C"),
    ('\u{1DB9}', "<super> 028B"),
    ('\u{1DBA}', "<super> 028C"),
    ('\u{1DBB}', "<super> 007A"),
    ('\u{1DBC}', "<super> 0290"),
    ('\u{1DBD}', "<super> 0291"),
    ('\u{1DBE}', "<super> 0292"),
    ('\u{1DBF}', "<super> 03B8"),
    ('\u{1E00}', "0041 0325"),
    ('\u{1E01}', "0061 0325"),
    ('\u{1E02}', "0042 0307"),
    ('\u{1E03}', "0062 0307"),
    ('\u{1E04}', "0042 0323"),
    ('\u{1E05}', "0062 0323"),
    ('\u{1E06}', "0042 0331"),
    ('\u{1E07}', "0062 0331"),
    ('\u{1E08}', "00C7 0301"),
    ('\u{1E09}', "00E7 0301"),
    ('\u{1E0A}', "0044 0307"),
    ('\u{1E0B}', "0064 0307"),
    ('\u{1E0C}', "0044 0323"),
    ('\u{1E0D}', "0064 0323"),
    ('\u{1E0E}', "0044 0331"),
    ('\u{1E0F}', "0064 0331"),
    ('\u{1E10}', "0044 0327"),
    ('\u{1E11}', "0064 0327"),
    ('\u{1E12}', "0044 032D"),
    ('\u{1E13}', "0064 032D"),
    ('\u{1E14}', "0112 0300"),
    ('\u{1E15}', "0113 0300"),
    ('\u{1E16}', "0112 0301"),
    ('\u{1E17}', "0113 0301"),
    ('\u{1E18}', "0045 032D"),
    ('\u{1E19}', "0065 032D"),
    ('\u{1E1A}', "0045 0330"),
    ('\u{1E1B}', "0065 0330"),
    ('\u{1E1C}', "0228 0306"),
    ('\u{1E1D}', "0229 0306"),
    ('\u{1E1E}', "0046 0307"),
    ('\u{1E1F}', "0066 0307"),
    ('\u{1E20}', "0047 0304"),
    ('\u{1E21}', "0067 0304"),
    ('\u{1E22}', "0048 0307"),
    ('\u{1E23}', "0068 0307"),
    ('\u{1E24}', "0048 0323"),
    ('\u{1E25}', "0068 0323"),
    ('\u{1E26}', "0048 0308"),
    ('\u{1E27}', "0068 0308"),
    ('\u{1E28}', "0048 0327"),
    ('\u{1E29}', "0068 0327"),
    ('\u{1E2A}', "0048 032E"),
    ('\u{1E2B}', "0068 032E"),
    ('\u{1E2C}', "0049 0330"),
    ('\u{1E2D}', "0069 0330"),
    ('\u{1E2E}', "00CF 0301"),
    ('\u{1E2F}', "00EF 0301"),
    ('\u{1E30}', "004B 0301"),
    ('\u{1E31}', "006B 0301"),
    ('\u{1E32}', "004B 0323"),
    ('\u{1E33}', "006B 0323"),
    ('\u{1E34}', "004B 0331"),
    ('\u{1E35}', "006B 0331"),
    ('\u{1E36}', "004C 0323"),
    ('\u{1E37}', "006C 0323"),
    ('\u{1E38}', "1E36 0304"),
    ('\u{1E39}', "1E37 0304"),
    ('\u{1E3A}', "004C 0331"),
    ('\u{1E3B}', "006C 0331"),
    ('\u{1E3C}', "004C 032D"),
    ('\u{1E3D}', "006C 032D"),
    ('\u{1E3E}', "004D 0301"),
    ('\u{1E3F}', "006D 0301"),
    ('\u{1E40}', "004D 0307"),
    ('\u{1E41}', "006D 0307"),
    ('\u{1E42}', "004D 0323"),
    ('\u{1E43}', "006D 0323"),
    ('\u{1E44}', "004E 0307"),
    ('\u{1E45}', "006E 0307"),
    ('\u{1E46}', "004E 0323"),
    ('\u{1E47}', "006E 0323"),
    ('\u{1E48}', "004E 0331"),
    ('\u{1E49}', "006E 0331"),
    ('\u{1E4A}', "004E 032D"),
    ('\u{1E4B}', "006E 032D"),
    ('\u{1E4C}', "00D5 0301"),
    ('\u{1E4D}', "00F5 0301"),
    ('\u{1E4E}', "00D5 0308"),
    ('\u{1E4F}', "00F5 0308"),
    ('\u{1E50}', "014C 0300"),
    ('\u{1E51}', "014D 0300"),
    ('\u{1E52}', "014C 0301"),
    ('\u{1E53}', "014D 0301"),
    ('\u{1E54}', "0050 0301"),
    ('\u{1E55}', "0070 0301"),
    ('\u{1E56}', "0050 0307"),
    ('\u{1E57}', "0070 0307"),
    ('\u{1E58}', "0052 0307"),
    ('\u{1E59}', "0072 0307"),
    ('\u{1E5A}', "0052 0323"),
    ('\u{1E5B}', "0072 0323"),
    ('\u{1E5C}', "1E5A 0304"),
    ('\u{1E5D}', "1E5B 0304"),
    ('\u{1E5E}', "0052 0331"),
    ('\u{1E5F}', "0072 0331"),
    ('\u{1E60}', "0053 0307"),
    ('\u{1E61}', "0073 0307"),
    ('\u{1E62}', "0053 0323"),
    ('\u{1E63}', "0073 0323"),
    ('\u{1E64}', "015A 0307"),
    ('\u{1E65}', "015B 0307"),
    ('\u{1E66}', "0160 0307"),
    ('\u{1E67}', "0161 0307"),
    ('\u{1E68}', "1E62 0307"),
    ('\u{1E69}', "1E63 0307"),
    ('\u{1E6A}', "0054 0307"),
    ('\u{1E6B}', "0074 0307"),
    ('\u{1E6C}', "0054 0323"),
    ('\u{1E6D}', "0074 0323"),
    ('\u{1E6E}', "0054 0331"),
    ('\u{1E6F}', "0074 0331"),
    ('\u{1E70}', "0054 032D"),
    ('\u{1E71}', "0074 032D"),
    ('\u{1E72}', "0055 0324"),
    ('\u{1E73}', "0075 0324"),
    ('\u{1E74}', "0055 0330"),
    ('\u{1E75}', "0075 0330"),
    ('\u{1E76}', "0055 032D"),
    ('\u{1E77}', "0075 032D"),
    ('\u{1E78}', "0168 0301"),
    ('\u{1E79}', "0169 0301"),
    ('\u{1E7A}', "016A 0308"),
    ('\u{1E7B}', "016B 0308"),
    ('\u{1E7C}', "0056 0303"),
    ('\u{1E7D}', "0076 0303"),
    ('\u{1E7E}', "0056 0323"),
    ('\u{1E7F}', "0076 0323"),
    ('\u{1E80}', "0057 0300"),
    ('\u{1E81}', "0077 0300"),
    ('\u{1E82}', "0057 0301"),
    ('\u{1E83}', "0077 0301"),
    ('\u{1E84}', "0057 0308"),
    ('\u{1E85}', "0077 0308"),
    ('\u{1E86}', "0057 0307"),
    ('\u{1E87}', "0077 0307"),
    ('\u{1E88}', "0057 0323"),
    ('\u{1E89}', "0077 0323"),
    ('\u{1E8A}', "0058 0307"),
    ('\u{1E8B}', "0078 0307"),
    ('\u{1E8C}', "0058 0308"),
    ('\u{1E8D}', "0078 0308"),
    ('\u{1E8E}', "0059 0307"),
    ('\u{1E8F}', "0079 0307"),
    ('\u{1E90}', "005A 0302"),
    ('\u{1E91}', "007A 0302"),
    ('\u{1E92}', "005A 0323"),
    ('\u{1E93}', "007A 0323"),
    ('\u{1E94}', "005A 0331"),
    ('\u{1E95}', "007A 0331"),
    ('\u{1E96}', "0068 0331"),
    ('\u{1E97}', "0074 0308"),
    ('\u{1E98}', "0077 030A"),
    ('\u{1E99}', "0079 030A"),
    ('\u{1E9A}', "<compat> 0061 02BE"),
    ('\u{1E9B}', "017F 0307"),
    ('\u{1EA0}', "0041 0323"),
    ('\u{1EA1}', "0061 0323"),
    ('\u{1EA2}', "0041 0309"),
    ('\u{1EA3}', "0061 0309"),
    ('\u{1EA4}', "00C2 0301"),
    ('\u{1EA5}', "00E2 0301"),
    ('\u{1EA6}', "00C2 0300"),
    ('\u{1EA7}', "00E2 0300"),
    ('\u{1EA8}', "00C2 0309"),
    ('\u{1EA9}', "00E2 0309"),
    ('\u{1EAA}', "00C2 0303"),
    ('\u{1EAB}', "00E2 0303"),
    ('\u{1EAC}', "1EA0 0302"),
    ('\u{1EAD}', "1EA1 0302"),
    ('\u{1EAE}', "0102 0301"),
    ('\u{1EAF}', "0103 0301"),
    ('\u{1EB0}', "0102 0300"),
    ('\u{1EB1}', "0103 0300"),
    ('\u{1EB2}', "0102 0309"),
    ('\u{1EB3}', "0103 0309"),
    ('\u{1EB4}', "0102 0303"),
    ('\u{1EB5}', "0103 0303"),
    ('\u{1EB6}', "1EA0 0306"),
    ('\u{1EB7}', "1EA1 0306"),
    ('\u{1EB8}', "0045 0323"),
    ('\u{1EB9}', "0065 0323"),
    ('\u{1EBA}', "0045 0309"),
    ('\u{1EBB}', "0065 0309"),
    ('\u{1EBC}', "0045 0303"),
    ('\u{1EBD}', "0065 0303"),
    ('\u{1EBE}', "00CA 0301"),
    ('\u{1EBF}', "00EA 0301"),
    ('\u{1EC0}', "00CA 0300"),
    ('\u{1EC1}', "00EA 0300"),
    ('\u{1EC2}', "00CA 0309"),
    ('\u{1EC3}', "00EA 0309"),
    ('\u{1EC4}', "00CA 0303"),
    ('\u{1EC5}', "00EA 0303"),
    ('\u{1EC6}', "1EB8 0302"),
    ('\u{1EC7}', "1EB9 0302"),
    ('\u{1EC8}', "0049 0309"),
    ('\u{1EC9}', "0069 0309"),
    ('\u{1ECA}', "0049 0323"),
    ('\u{1ECB}', "0069 0323"),
    ('\u{1ECC}', "004F 0323"),
    ('\u{1ECD}', "006F 0323"),
    ('\u{1ECE}', "004F 0309"),
    ('\u{1ECF}', "006F 0309"),
    ('\u{1ED0}', "00D4 0301"),
    ('\u{1ED1}', "00F4 0301"),
    ('\u{1ED2}', "00D4 0300"),
    ('\u{1ED3}', "00F4 0300"),
    ('\u{1ED4}', "00D4 0309"),
    ('\u{1ED5}', "00F4 0309"),
    ('\u{1ED6}', "00D4 0303"),
    ('\u{1ED7}', "00F4 0303"),
    ('\u{1ED8}', "1ECC 0302"),
    ('\u{1ED9}', "1ECD 0302"),
    ('\u{1EDA}', "01A0 0301"),
    ('\u{1EDB}', "01A1 0301"),
    ('\u{1EDC}', "01A0 0300"),
    ('\u{1EDD}', "01A1 0300"),
    ('\u{1EDE}', "01A0 0309"),
    ('\u{1EDF}', "01A1 0309"),
    ('\u{1EE0}', "01A0 0303"),
    ('\u{1EE1}', "01A1 0303"),
    ('\u{1EE2}', "01A0 0323"),
    ('\u{1EE3}', "01A1 0323"),
    ('\u{1EE4}', "0055 0323"),
    ('\u{1EE5}', "0075 0323"),
    ('\u{1EE6}', "0055 0309"),
    ('\u{1EE7}', "0075 0309"),
    ('\u{1EE8}', "01AF 0301"),
    ('\u{1EE9}', "01B0 0301"),
    ('\u{1EEA}', "01AF 0300"),
    ('\u{1EEB}', "01B0 0300"),
    ('\u{1EEC}', "01AF 0309"),
    ('\u{1EED}', "01B0 0309"),
    ('\u{1EEE}', "01AF 0303"),
    ('\u{1EEF}', "01B0 0303"),
    ('\u{1EF0}', "01AF 0323"),
    ('\u{1EF1}', "01B0 0323"),
    ('\u{1EF2}', "0059 0300"),
    ('\u{1EF3}', "0079 0300"),
    ('\u{1EF4}', "0059 0323"),
    ('\u{1EF5}', "0079 0323"),
    ('\u{1EF6}', "0059 0309"),
    ('\u{1EF7}', "0079 0309"),
    ('\u{1EF8}', "0059 0303"),
    ('\u{1EF9}', "0079 0303"),
    ('\u{1F00}', "03B1 0313"),
    ('\u{1F01}', "03B1 0314"),
    ('\u{1F02}', "1F00 0300"),
    ('\u{1F03}', "1F01 0300"),
    ('\u{1F04}', "1F00 0301"),
    ('\u{1F05}', "1F01 0301"),
    ('\u{1F06}', "1F00 0342"),
    ('\u{1F07}', "1F01 0342"),
    ('\u{1F08}', "0391 0313"),
    ('\u{1F09}', "0391 0314"),
    ('\u{1F0A}', "1F08 0300"),
    ('\u{1F0B}', "1F09 0300"),
    ('\u{1F0C}', "1F08 0301"),
    ('\u{1F0D}', "1F09 0301"),
    ('\u{1F0E}', "1F08 0342"),
    ('\u{1F0F}', "1F09 0342"),
    ('\u{1F10}', "03B5 0313"),
    ('\u{1F11}', "03B5 0314"),
    ('\u{1F12}', "1F10 0300"),
    ('\u{1F13}', "1F11 0300"),
    ('\u{1F14}', "1F10 0301"),
    ('\u{1F15}', "1F11 0301"),
    ('\u{1F18}', "0395 0313"),
    ('\u{1F19}', "0395 0314"),
    ('\u{1F1A}', "1F18 0300"),
    ('\u{1F1B}', "1F19 0300"),
    ('\u{1F1C}', "1F18 0301"),
    ('\u{1F1D}', "1F19 0301"),
    ('\u{1F20}', "03B7 0313"),
    ('\u{1F21}', "03B7 0314"),
    ('\u{1F22}', "1F20 0300"),
    ('\u{1F23}', "1F21 0300"),
    ('\u{1F24}', "1F20 0301"),
    ('\u{1F25}', "1F21 0301"),
    ('\u{1F26}', "1F20 0342"),
    ('\u{1F27}', "1F21 0342"),
    ('\u{1F28}', "0397 0313"),
    ('\u{1F29}', "0397 0314"),
    ('\u{1F2A}', "1F28 0300"),
    ('\u{1F2B}', "1F29 0300"),
    ('\u{1F2C}', "1F28 0301"),
    ('\u{1F2D}', "1F29 0301"),
    ('\u{1F2E}', "1F28 0342"),
    ('\u{1F2F}', "1F29 0342"),
    ('\u{1F30}', "03B9 0313"),
    ('\u{1F31}', "03B9 0314"),
    ('\u{1F32}', "1F30 0300"),
    ('\u{1F33}', "1F31 0300"),
    ('\u{1F34}', "1F30 0301"),
    ('\u{1F35}', "1F31 0301"),
    ('\u{1F36}', "1F30 0342"),
    ('\u{1F37}', "1F31 0342"),
    ('\u{1F38}', "0399 0313"),
    ('\u{1F39}', "0399 0314"),
    ('\u{1F3A}', "1F38 0300"),
    ('\u{1F3B}', "1F39 0300"),
    ('\u{1F3C}', "1F38 0301"),
    ('\u{1F3D}', "1F39 0301"),
    ('\u{1F3E}', "1F38 0342"),
    ('\u{1F3F}', "1F39 0342"),
    ('\u{1F40}', "03BF 0313"),
    ('\u{1F41}', "03BF 0314"),
    ('\u{1F42}', "1F40 0300"),
    ('\u{1F43}', "1F41 0300"),
    ('\u{1F44}', "1F40 0301"),
    ('\u{1F45}', "1F41 0301"),
    ('\u{1F48}', "039F 0313"),
    ('\u{1F49}', "039F 0314"),
    ('\u{1F4A}', "1F48 0300"),
    ('\u{1F4B}', "1F49 0300"),
    ('\u{1F4C}', "1F48 0301"),
    ('\u{1F4D}', "1F49 0301"),
    ('\u{1F50}', "03C5 0313"),
    ('\u{1F51}', "03C5 0314"),
    ('\u{1F52}', "1F50 0300"),
    ('\u{1F53}', "1F51 0300"),
    ('\u{1F54}', "1F50 0301"),
    ('\u{1F55}', "1F51 0301"),
    ('\u{1F56}', "1F50 0342"),
    ('\u{1F57}', "1F51 0342"),
    ('\u{1F59}', "03A5 0314"),
    ('\u{1F5B}', "1F59 0300"),
    ('\u{1F5D}', "1F59 0301"),
    ('\u{1F5F}', "1F59 0342"),
    ('\u{1F60}', "03C9 0313"),
    ('\u{1F61}', "03C9 0314"),
    ('\u{1F62}', "1F60 0300"),
    ('\u{1F63}', "1F61 0300"),
    ('\u{1F64}', "1F60 0301"),
    ('\u{1F65}', "1F61 0301"),
    ('\u{1F66}', "1F60 0342"),
    ('\u{1F67}', "1F61 0342"),
    ('\u{1F68}', "03A9 0313"),
    ('\u{1F69}', "03A9 0314"),
    ('\u{1F6A}', "1F68 0300"),
    ('\u{1F6B}', "1F69 0300"),
    ('\u{1F6C}', "1F68 0301"),
    ('\u{1F6D}', "1F69 0301"),
    ('\u{1F6E}', "1F68 0342"),
    ('\u{1F6F}', "1F69 0342"),
    ('\u{1F70}', "03B1 0300"),
    ('\u{1F71}', "03AC"),
    ('\u{1F72}', "03B5 0300"),
    ('\u{1F73}', "03AD"),
    ('\u{1F74}', "03B7 0300"),
    ('\u{1F75}', "03AE"),
    ('\u{1F76}', "03B9 0300"),
    ('\u{1F77}', "03AF"),
    ('\u{1F78}', "03BF 0300"),
    ('\u{1F79}', "03CC"),
    ('\u{1F7A}', "03C5 0300"),
    ('\u{1F7B}', "03CD"),
    ('\u{1F7C}', "03C9 0300"),
    ('\u{1F7D}', "03CE"),
    ('\u{1F80}', "1F00 0345"),
    ('\u{1F81}', "1F01 0345"),
    ('\u{1F82}', "1F02 0345"),
    ('\u{1F83}', "1F03 0345"),
    ('\u{1F84}', "1F04 0345"),
    ('\u{1F85}', "1F05 0345"),
    ('\u{1F86}', "1F06 0345"),
    ('\u{1F87}', "1F07 0345"),
    ('\u{1F88}', "1F08 0345"),
    ('\u{1F89}', "1F09 0345"),
    ('\u{1F8A}', "1F0A 0345"),
    ('\u{1F8B}', "1F0B 0345"),
    ('\u{1F8C}', "1F0C 0345"),
    ('\u{1F8D}', "1F0D 0345"),
    ('\u{1F8E}', "1F0E 0345"),
    ('\u{1F8F}', "1F0F 0345"),
    ('\u{1F90}', "1F20 0345"),
    ('\u{1F91}', "1F21 0345"),
    ('\u{1F92}', "1F22 0345"),
    ('\u{1F93}', "1F23 0345"),
    ('\u{1F94}', "1F24 0345"),
    ('\u{1F95}', "1F25 0345"),
    ('\u{1F96}', "1F26 0345"),
    ('\u{1F97}', "1F27 0345"),
    ('\u{1F98}', "1F28 0345"),
    ('\u{1F99}', "1F29 0345"),
    ('\u{1F9A}', "1F2A 0345"),
    ('\u{1F9B}', "1F2B 0345"),
    ('\u{1F9C}', "1F2C 0345"),
    ('\u{1F9D}', "1F2D 0345"),
    ('\u{1F9E}', "1F2E 0345"),
    ('\u{1F9F}', "1F2F 0345"),
    ('\u{1FA0}', "1F60 0345"),
    ('\u{1FA1}', "1F61 0345"),
    ('\u{1FA2}', "1F62 0345"),
    ('\u{1FA3}', "1F63 0345"),
    ('\u{1FA4}', "1F64 0345"),
    ('\u{1FA5}', "1F65 0345"),
    ('\u{1FA6}', "1F66 0345"),
    ('\u{1FA7}', "1F67 0345"),
    ('\u{1FA8}', "1F68 0345"),
    ('\u{1FA9}', "1F69 0345"),
    ('\u{1FAA}', "1F6A 0345"),
    ('\u{1FAB}', "1F6B 0345"),
    ('\u{1FAC}', "1F6C 0345"),
    ('\u{1FAD}', "1F6D 0345"),
    ('\u{1FAE}', "1F6E 0345"),
    ('\u{1FAF}', "1F6F 0345"),
    ('\u{1FB0}', "03B1 0306"),
    ('\u{1FB1}', "03B1 0304"),
    ('\u{1FB2}', "1F70 0345"),
    ('\u{1FB3}', "03B1 0345"),
    ('\u{1FB4}', "03AC 0345"),
    ('\u{1FB6}', "03B1 0342"),
    ('\u{1FB7}', "1FB6 0345"),
    ('\u{1FB8}', "0391 0306"),
    ('\u{1FB9}', "0391 0304"),
    ('\u{1FBA}', "0391 0300"),
    ('\u{1FBB}', "0386"),
    ('\u{1FBC}', "0391 0345"),
    ('\u{1FBD}', "<compat> 0020 0313"),
    ('\u{1FBE}', "03B9"),
    ('\u{1FBF}', "<compat> 0020 0313"),
    ('\u{1FC0}', "<compat> 0020 0342"),
    ('\u{1FC1}', "00A8 0342"),
    ('\u{1FC2}', "1F74 0345"),
    ('\u{1FC3}', "03B7 0345"),
    ('\u{1FC4}', "03AE 0345"),
    ('\u{1FC6}', "03B7 0342"),
    ('\u{1FC7}', "1FC6 0345"),
    ('\u{1FC8}', "0395 0300"),
    ('\u{1FC9}', "0388"),
    ('\u{1FCA}', "0397 0300"),
    ('\u{1FCB}', "0389"),
    ('\u{1FCC}', "0397 0345"),
    ('\u{1FCD}', "1FBF 0300"),
    ('\u{1FCE}', "1FBF 0301"),
    ('\u{1FCF}', "1FBF 0342"),
    ('\u{1FD0}', "03B9 0306"),
    ('\u{1FD1}', "03B9 0304"),
    ('\u{1FD2}', "03CA 0300"),
    ('\u{1FD3}', "0390"),
    ('\u{1FD6}', "03B9 0342"),
    ('\u{1FD7}', "03CA 0342"),
    ('\u{1FD8}', "0399 0306"),
    ('\u{1FD9}', "0399 0304"),
    ('\u{1FDA}', "0399 0300"),
    ('\u{1FDB}', "038A"),
    ('\u{1FDD}', "1FFE 0300"),
    ('\u{1FDE}', "1FFE 0301"),
    ('\u{1FDF}', "1FFE 0342"),
    ('\u{1FE0}', "03C5 0306"),
    ('\u{1FE1}', "03C5 0304"),
    ('\u{1FE2}', "03CB 0300"),
    ('\u{1FE3}', "03B0"),
    ('\u{1FE4}', "03C1 0313"),
    ('\u{1FE5}', "03C1 0314"),
    ('\u{1FE6}', "03C5 0342"),
    ('\u{1FE7}', "03CB 0342"),
    ('\u{1FE8}', "03A5 0306"),
    ('\u{1FE9}', "03A5 0304"),
    ('\u{1FEA}', "03A5 0300"),
    ('\u{1FEB}', "038E"),
    ('\u{1FEC}', "03A1 0314"),
    ('\u{1FED}', "00A8 0300"),
    ('\u{1FEE}', "0385"),
    ('\u{1FEF}', "0060"),
    ('\u{1FF2}', "1F7C 0345"),
    ('\u{1FF3}', "03C9 0345"),
    ('\u{1FF4}', "03CE 0345"),
    ('\u{1FF6}', "03C9 0342"),
    ('\u{1FF7}', "1FF6 0345"),
    ('\u{1FF8}', "039F 0300"),
    ('\u{1FF9}', "038C"),
    ('\u{1FFA}', "03A9 0300"),
    ('\u{1FFB}', "038F"),
    ('\u{1FFC}', "03A9 0345"),
    ('\u{1FFD}', "00B4"),
    ('\u{1FFE}', "<compat> 0020 0314"),
    ('\u{2000}', "2002"),
    ('\u{2001}', "2003"),
    ('\u{2002}', "<compat> 0020"),
    ('\u{2003}', "<compat> 0020"),
    ('\u{2004}', "<compat> 0020"),
    ('\u{2005}', "<compat> 0020"),
    ('\u{2006}', "<compat> 0020"),
    ('\u{2007}', "<noBreak> 0020"),
    ('\u{2008}', "<compat> 0020"),
    ('\u{2009}', "<compat> 0020"),
    ('\u{200A}', "<compat> 0020"),
    ('\u{2011}', "<noBreak> 2010"),
    ('\u{2017}', "<compat> 0020 0333"),
    ('\u{2024}', "<compat> 002E"),
    ('\u{2025}', "<compat> 002E 002E"),
    ('\u{2026}', "<compat> 002E 002E 002E"),
    ('\u{202F}', "<noBreak> 0020"),
    ('\u{2033}', "<compat> 2032 2032"),
    ('\u{2034}', "<compat> 2032 2032 2032"),
    ('\u{2036}', "<compat> 2035 2035"),
    ('\u{2037}', "<compat> 2035 2035 2035"),
    ('\u{203C}', "<compat> 0021 0021"),
    ('\u{203E}', "<compat> 0020 0305"),
    ('\u{2047}', "<compat> 003F 003F"),
    ('\u{2048}', "<compat> 003F 0021"),
    ('\u{2049}', "<compat> 0021 003F"),
    ('\u{2057}', "<compat> 2032 2032 2032 2032"),
    ('\u{205F}', "<compat> 0020"),
    ('\u{2070}', "<super> 0030"),
    ('\u{2071}', "<super> 0069"),
    ('\u{2074}', "<super> 0034"),
    ('\u{2075}', "<super> 0035"),
    ('\u{2076}', "<super> 0036"),
    ('\u{2077}', "<super> 0037"),
    ('\u{2078}', "<super> 0038"),
    ('\u{2079}', "<super> 0039"),
    ('\u{207A}', "<super> 002B"),
    ('\u{207B}', "<super> 2212"),
    ('\u{207C}', "<super> 003D"),
    ('\u{207D}', "<super> 0028"),
    ('\u{207E}', "<super> 0029"),
    ('\u{207F}', "<super> 006E"),
    ('\u{2080}', "<sub> 0030"),
    ('\u{2081}', "<sub> 0031"),
    ('\u{2082}', "<sub> 0032"),
    ('\u{2083}', "<sub> 0033"),
    ('\u{2084}', "<sub> 0034"),
    ('\u{2085}', "<sub> 0035"),
    ('\u{2086}', "<sub> 0036"),
    ('\u{2087}', "<sub> 0037"),
    ('\u{2088}', "<sub> 0038"),
    ('\u{2089}', "<sub> 0039"),
    ('\u{208A}', "<sub> 002B"),
    ('\u{208B}', "<sub> 2212"),
    ('\u{208C}', "<sub> 003D"),
    ('\u{208D}', "<sub> 0028"),
    ('\u{208E}', "<sub> 0029"),
    ('\u{2090}', "<sub> 0061"),
    ('\u{2091}', "<sub> 0065"),
    ('\u{2092}', "<sub> 006F"),
    ('\u{2093}', "<sub> 0078"),
    ('\u{2094}', "<sub> 0259"),
    ('\u{2095}', "<sub> 0068"),
    ('\u{2096}', "<sub> 006B"),
    ('\u{2097}', "<sub> 006C"),
    ('\u{2098}', "<sub> 006D"),
    ('\u{2099}', "<sub> 006E"),
    ('\u{209A}', "<sub> 0070"),
    ('\u{209B}', "<sub> 0073"),
    ('\u{209C}', "<sub> 0074"),
    ('\u{20A8}', "<compat> 0052 0073"),
    ('\u{2100}', "<compat> 0061 002F 0063"),
    ('\u{2101}', "<compat> 0061 002F 0073"),
    ('\u{2102}', "<font> 0043"),
    ('\u{2103}', "<compat> 00B0 0043"),
    ('\u{2105}', "<compat> 0063 002F 006F"),
    ('\u{2106}', "<compat> 0063 002F 0075"),
    ('\u{2107}', "<compat> 0190"),
    ('\u{2109}', "<compat> 00B0 0046"),
    ('\u{210A}', "<font> 0067"),
    ('\u{210B}', "<font> 0048"),
    ('\u{210C}', "<font> 0048"),
    ('\u{210D}', "<font> 0048"),
    ('\u{210E}', "<font> 0068"),
    ('\u{210F}', "<font> 0127"),
    ('\u{2110}', "<font> 0049"),
    ('\u{2111}', "<font> 0049"),
    ('\u{2112}', "<font> 004C"),
    ('\u{2113}', "<font> 006C"),
    ('\u{2115}', "<font> 004E"),
    ('\u{2116}', "<compat> 004E 006F"),
    ('\u{2119}', "<font> 0050"),
    ('\u{211A}', "<font> 0051"),
    ('\u{211B}', "<font> 0052"),
    ('\u{211C}', "<font> 0052"),
    ('\u{211D}', "<font> 0052"),
    ('\u{2120}', "<super> 0053 004D"),
    ('\u{2121}', "<compat> 0054 0045 004C"),
    ('\u{2122}', "<super> 0054 004D"),
    ('\u{2124}', "<font> 005A"),
    ('\u{2126}', "03A9"),
    ('\u{2128}', "<font> 005A"),
    ('\u{212A}', "004B"),
    ('\u{212B}', "00C5"),
    ('\u{212C}', "<font> 0042"),
    ('\u{212D}', "<font> 0043"),
    ('\u{212F}', "<font> 0065"),
    ('\u{2130}', "<font> 0045"),
    ('\u{2131}', "<font> 0046"),
    ('\u{2133}', "<font> 004D"),
    ('\u{2134}', "<font> 006F"),
    ('\u{2135}', "<compat> 05D0"),
    ('\u{2136}', "<compat> 05D1"),
    ('\u{2137}', "<compat> 05D2"),
    ('\u{2138}', "<compat> 05D3"),
    ('\u{2139}', "<font> 0069"),
    ('\u{213B}', "<compat> 0046 0041 0058"),
    ('\u{213C}', "<font> 03C0"),
    ('\u{213D}', "<font> 03B3"),
    ('\u{213E}', "<font> 0393"),
    ('\u{213F}', "<font> 03A0"),
    ('\u{2140}', "<font> 2211"),
    ('\u{2145}', "<font> 0044"),
    ('\u{2146}', "<font> 0064"),
    ('\u{2147}', "<font> 0065"),
    ('\u{2148}', "<font> 0069"),
    ('\u{2149}', "<font> 006A"),
    ('\u{2150}', "<fraction> 0031 2044 0037"),
    ('\u{2151}', "<fraction> 0031 2044 0039"),
    ('\u{2152}', "<fraction> 0031 2044 0031 0030"),
    ('\u{2153}', "<fraction> 0031 2044 0033"),
    ('\u{2154}', "<fraction> 0032 2044 0033"),
    ('\u{2155}', "<fraction> 0031 2044 0035"),
    ('\u{2156}', "<fraction> 0032 2044 0035"),
    ('\u{2157}', "<fraction> 0033 2044 0035"),
    ('\u{2158}', "<fraction> 0034 2044 0035"),
    ('\u{2159}', "<fraction> 0031 2044 0036"),
    ('\u{215A}', "<fraction> 0035 2044 0036"),
    ('\u{215B}', "<fraction> 0031 2044 0038"),
    ('\u{215C}', "<fraction> 0033 2044 0038"),
    ('\u{215D}', "<fraction> 0035 2044 0038"),
    ('\u{215E}', "<fraction> 0037 2044 0038"),
    ('\u{215F}', "<fraction> 0031 2044"),
    ('\u{2160}', "<compat> 0049"),
    ('\u{2161}', "<compat> 0049 0049"),
    ('\u{2162}', "<compat> 0049 0049 0049"),
    ('\u{2163}', "<compat> 0049 0056"),
    ('\u{2164}', "<compat> 0056"),
    ('\u{2165}', "<compat> 0056 0049"),
    ('\u{2166}', "<compat> 0056 0049 0049"),
    ('\u{2167}', "<compat> 0056 0049 0049 0049"),
    ('\u{2168}', "<compat> 0049 0058"),
    ('\u{2169}', "<compat> 0058"),
    ('\u{216A}', "<compat> 0058 0049"),
    ('\u{216B}', "<compat> 0058 0049 0049"),
    ('\u{216C}', "<compat> 004C"),
    ('\u{216D}', "<compat> 0043"),
    ('\u{216E}', "<compat> 0044"),
    ('\u{216F}', "<compat> 004D"),
    ('\u{2170}', "<compat> 0069"),
    ('\u{2171}', "<compat> 0069 0069"),
    ('\u{2172}', "<compat> 0069 0069 0069"),
    ('\u{2173}', "<compat> 0069 0076"),
    ('\u{2174}', "<compat> 0076"),
    ('\u{2175}', "<compat> 0076 0069"),
    ('\u{2176}', "<compat> 0076 0069 0069"),
    ('\u{2177}', "<compat> 0076 0069 0069 0069"),
    ('\u{2178}', "<compat> 0069 0078"),
    ('\u{2179}', "<compat> 0078"),
    ('\u{217A}', "<compat> 0078 0069"),
    ('\u{217B}', "<compat> 0078 0069 0069"),
    ('\u{217C}', "<compat> 006C"),
    ('\u{217D}', "<compat> 0063"),
    ('\u{217E}', "<compat> 0064"),
    ('\u{217F}', "<compat> 006D"),
    ('\u{2189}', "<fraction> 0030 2044 0033"),
    ('\u{219A}', "2190 0338"),
    ('\u{219B}', "2192 0338"),
    ('\u{21AE}', "2194 0338"),
    ('\u{21CD}', "21D0 0338"),
    ('\u{21CE}', "21D4 0338"),
    ('\u{21CF}', "21D2 0338"),
    ('\u{2204}', "2203 0338"),
    ('\u{2209}', "2208 0338"),
    ('\u{220C}', "220B 0338"),
    ('\u{2224}', "2223 0338"),
    ('\u{2226}', "2225 0338"),
    ('\u{222C}', "<compat> 222B 222B"),
    ('\u{222D}', "<compat> 222B 222B 222B"),
    ('\u{222F}', "<compat> 222E 222E"),
    ('\u{2230}', "<compat> 222E 222E 222E"),
    ('\u{2241}', "223C 0338"),
    ('\u{2244}', "2243 0338"),
    ('\u{2247}', "2245 0338"),
    ('\u{2249}', "2248 0338"),
    ('\u{2260}', "003D 0338"),
    ('\u{2262}', "2261 0338"),
    ('\u{226D}', "224D 0338"),
    ('\u{226E}', "003C 0338"),
    ('\u{226F}', "003E 0338"),
    ('\u{2270}', "2264 0338"),
    ('\u{2271}', "2265 0338"),
    ('\u{2274}', "2272 0338"),
    ('\u{2275}', "2273 0338"),
    ('\u{2278}', "2276 0338"),
    ('\u{2279}', "2277 0338"),
    ('\u{2280}', "227A 0338"),
    ('\u{2281}', "227B 0338"),
    ('\u{2284}', "2282 0338"),
    ('\u{2285}', "2283 0338"),
    ('\u{2288}', "2286 0338"),
    ('\u{2289}', "2287 0338"),
    ('\u{22AC}', "22A2 0338"),
    ('\u{22AD}', "22A8 0338"),
    ('\u{22AE}', "22A9 0338"),
    ('\u{22AF}', "22AB 0338"),
    ('\u{22E0}', "227C 0338"),
    ('\u{22E1}', "227D 0338"),
    ('\u{22E2}', "2291 0338"),
    ('\u{22E3}', "2292 0338"),
    ('\u{22EA}', "22B2 0338"),
    ('\u{22EB}', "22B3 0338"),
    ('\u{22EC}', "22B4 0338"),
    ('\u{22ED}', "22B5 0338"),
    ('\u{2329}', "3008"),
    ('\u{232A}', "3009"),
    ('\u{2460}', "<circle> 0031"),
    ('\u{2461}', "<circle> 0032"),
    ('\u{2462}', "<circle> 0033"),
    ('\u{2463}', "<circle> 0034"),
    ('\u{2464}', "<circle> 0035"),
    ('\u{2465}', "<circle> 0036"),
    ('\u{2466}', "<circle> 0037"),
    ('\u{2467}', "<circle> 0038"),
    ('\u{2468}', "<circle> 0039"),
    ('\u{2469}', "<circle> 0031 0030"),
    ('\u{246A}', "<circle> 0031 0031"),
    ('\u{246B}', "<circle> 0031 0032"),
    ('\u{246C}', "<circle> 0031 0033"),
    ('\u{246D}', "<circle> 0031 0034"),
    ('\u{246E}', "<circle> 0031 0035"),
    ('\u{246F}', "<circle> 0031 0036"),
    ('\u{2470}', "<circle> 0031 0037"),
    ('\u{2471}', "<circle> 0031 0038"),
    ('\u{2472}', "<circle> 0031 0039"),
    ('\u{2473}', "<circle> 0032 0030"),
    ('\u{2474}', "<compat> 0028 0031 0029"),
    ('\u{2475}', "<compat> 0028 0032 0029"),
    ('\u{2476}', "<compat> 0028 0033 0029"),
    ('\u{2477}', "<compat> 0028 0034 0029"),
    ('\u{2478}', "<compat> 0028 0035 0029"),
    ('\u{2479}', "<compat> 0028 0036 0029"),
    ('\u{247A}', "<compat> 0028 0037 0029"),
    ('\u{247B}', "<compat> 0028 0038 0029"),
    ('\u{247C}', "<compat> 0028 0039 0029"),
    ('\u{247D}', "<compat> 0028 0031 0030 0029"),
    ('\u{247E}', "<compat> 0028 0031 0031 0029"),
    ('\u{247F}', "<compat> 0028 0031 0032 0029"),
    ('\u{2480}', "<compat> 0028 0031 0033 0029"),
    ('\u{2481}', "<compat> 0028 0031 0034 0029"),
    ('\u{2482}', "<compat> 0028 0031 0035 0029"),
    ('\u{2483}', "<compat> 0028 0031 0036 0029"),
    ('\u{2484}', "<compat> 0028 0031 0037 0029"),
    ('\u{2485}', "<compat> 0028 0031 0038 0029"),
    ('\u{2486}', "<compat> 0028 0031 0039 0029"),
    ('\u{2487}', "<compat> 0028 0032 0030 0029"),
    ('\u{2488}', "<compat> 0031 002E"),
    ('\u{2489}', "<compat> 0032 002E"),
    ('\u{248A}', "<compat> 0033 002E"),
    ('\u{248B}', "<compat> 0034 002E"),
    ('\u{248C}', "<compat> 0035 002E"),
    ('\u{248D}', "<compat> 0036 002E"),
    ('\u{248E}', "<compat> 0037 002E"),
    ('\u{248F}', "<compat> 0038 002E"),
    ('\u{2490}', "<compat> 0039 002E"),
    ('\u{2491}', "<compat> 0031 0030 002E"),
    ('\u{2492}', "<compat> 0031 0031 002E"),
    ('\u{2493}', "<compat> 0031 0032 002E"),
    ('\u{2494}', "<compat> 0031 0033 002E"),
    ('\u{2495}', "<compat> 0031 0034 002E"),
    ('\u{2496}', "<compat> 0031 0035 002E"),
    ('\u{2497}', "<compat> 0031 0036 002E"),
    ('\u{2498}', "<compat> 0031 0037 002E"),
    ('\u{2499}', "<compat> 0031 0038 002E"),
    ('\u{249A}', "<compat> 0031 0039 002E"),
    ('\u{249B}', "<compat> 0032 0030 002E"),
    ('\u{249C}', "<compat> 0028 0061 0029"),
    ('\u{249D}', "<compat> 0028 0062 0029"),
    ('\u{249E}', "<compat> 0028 0063 0029"),
    ('\u{249F}', "<compat> 0028 0064 0029"),
    ('\u{24A0}', "<compat> 0028 0065 0029"),
    ('\u{24A1}', "<compat> 0028 0066 0029"),
    ('\u{24A2}', "<compat> 0028 0067 0029"),
    ('\u{24A3}', "<compat> 0028 0068 0029"),
    ('\u{24A4}', "<compat> 0028 0069 0029"),
    ('\u{24A5}', "<compat> 0028 006A 0029"),
    ('\u{24A6}', "<compat> 0028 006B 0029"),
    ('\u{24A7}', "<compat> 0028 006C 0029"),
    ('\u{24A8}', "<compat> 0028 006D 0029"),
    ('\u{24A9}', "<compat> 0028 006E 0029"),
    ('\u{24AA}', "<compat> 0028 006F 0029"),
    ('\u{24AB}', "<compat> 0028 0070 0029"),
    ('\u{24AC}', "<compat> 0028 0071 0029"),
    ('\u{24AD}', "<compat> 0028 0072 0029"),
    ('\u{24AE}', "<compat> 0028 0073 0029"),
    ('\u{24AF}', "<compat> 0028 0074 0029"),
    ('\u{24B0}', "<compat> 0028 0075 0029"),
    ('\u{24B1}', "<compat> 0028 0076 0029"),
    ('\u{24B2}', "<compat> 0028 0077 0029"),
    ('\u{24B3}', "<compat> 0028 0078 0029"),
    ('\u{24B4}', "<compat> 0028 0079 0029"),
    ('\u{24B5}', "<compat> 0028 007A 0029"),
    ('\u{24B6}', "<circle> 0041"),
    ('\u{24B7}', "<circle> 0042"),
    ('\u{24B8}', "<circle> 0043"),
    ('\u{24B9}', "<circle> 0044"),
    ('\u{24BA}', "<circle> 0045"),
    ('\u{24BB}', "<circle> 0046"),
    ('\u{24BC}', "<circle> 0047"),
    ('\u{24BD}', "<circle> 0048"),
    ('\u{24BE}', "<circle> 0049"),
    ('\u{24BF}', "<circle> 004A"),
    ('\u{24C0}', "<circle> 004B"),
    ('\u{24C1}', "<circle> 004C"),
    ('\u{24C2}', "<circle> 004D"),
    ('\u{24C3}', "<circle> 004E"),
    ('\u{24C4}', "<circle> 004F"),
    ('\u{24C5}', "<circle> 0050"),
    ('\u{24C6}', "<circle> 0051"),
    ('\u{24C7}', "<circle> 0052"),
    ('\u{24C8}', "<circle> 0053"),
    ('\u{24C9}', "<circle> 0054"),
    ('\u{24CA}', "<circle> 0055"),
    ('\u{24CB}', "<circle> 0056"),
    ('\u{24CC}', "<circle> 0057"),
    ('\u{24CD}', "<circle> 0058"),
    ('\u{24CE}', "<circle> 0059"),
    ('\u{24CF}', "<circle> 005A"),
    ('\u{24D0}', "<circle> 0061"),
    ('\u{24D1}', "<circle> 0062"),
    ('\u{24D2}', "<circle> 0063"),
    ('\u{24D3}', "<circle> 0064"),
    ('\u{24D4}', "<circle> 0065"),
    ('\u{24D5}', "<circle> 0066"),
    ('\u{24D6}', "<circle> 0067"),
    ('\u{24D7}', "<circle> 0068"),
    ('\u{24D8}', "<circle> 0069"),
    ('\u{24D9}', "<circle> 006A"),
    ('\u{24DA}', "<circle> 006B"),
    ('\u{24DB}', "<circle> 006C"),
    ('\u{24DC}', "<circle> 006D"),
    ('\u{24DD}', "<circle> 006E"),
    ('\u{24DE}', "<circle> 006F"),
    ('\u{24DF}', "<circle> 0070"),
    ('\u{24E0}', "<circle> 0071"),
    ('\u{24E1}', "<circle> 0072"),
    ('\u{24E2}', "<circle> 0073"),
    ('\u{24E3}', "<circle> 0074"),
    ('\u{24E4}', "<circle> 0075"),
    ('\u{24E5}', "<circle> 0076"),
    ('\u{24E6}', "<circle> 0077"),
    ('\u{24E7}', "<circle> 0078"),
    ('\u{24E8}', "<circle> 0079"),
    ('\u{24E9}', "<circle> 007A"),
    ('\u{24EA}', "<circle> 0030"),
    ('\u{2A0C}', "<compat> 222B 222B 222B 222B"),
    ('\u{2A74}', "<compat> 003A 003A 003D"),
    ('\u{2A75}', "<compat> 003D 003D"),
    ('\u{2A76}', "<compat> 003D 003D 003D"),
    ('\u{2ADC}', "2ADD 0338"),
    ('\u{2C7C}', "<sub> 006A"),
    ('\u{2C7D}', "<super> 0056"),
    ('\u{2D6F}', "<super> 2D61"),
    ('\u{2E9F}', "<compat> 6BCD"),
    ('\u{2EF3}', "<compat> 9F9F"),
    ('\u{2F00}', "<compat> 4E00"),
    ('\u{2F01}', "<compat> 4E28"),
    ('\u{2F02}', "<compat> 4E36"),
    ('\u{2F03}', "<compat> 4E3F"),
    ('\u{2F04}', "<compat> 4E59"),
    ('\u{2F05}', "<compat> 4E85"),
    ('\u{2F06}', "<compat> 4E8C"),
    ('\u{2F07}', "<compat> 4EA0"),
    ('\u{2F08}', "<compat> 4EBA"),
    ('\u{2F09}', "<compat> 513F"),
    ('\u{2F0A}', "<compat> 5165"),
    ('\u{2F0B}', "<compat> 516B"),
    ('\u{2F0C}', "<compat> 5182"),
    ('\u{2F0D}', "<compat> 5196"),
    ('\u{2F0E}', "<compat> 51AB"),
    ('\u{2F0F}', "<compat> 51E0"),
    ('\u{2F10}', "<compat> 51F5"),
    ('\u{2F11}', "<compat> 5200"),
    ('\u{2F12}', "<compat> 529B"),
    ('\u{2F13}', "<compat> 52F9"),
    ('\u{2F14}', "<compat> 5315"),
    ('\u{2F15}', "<compat> 531A"),
    ('\u{2F16}', "<compat> 5338"),
    ('\u{2F17}', "<compat> 5341"),
    ('\u{2F18}', "<compat> 535C"),
    ('\u{2F19}', "<compat> 5369"),
    ('\u{2F1A}', "<compat> 5382"),
    ('\u{2F1B}', "<compat> 53B6"),
    ('\u{2F1C}', "<compat> 53C8"),
    ('\u{2F1D}', "<compat> 53E3"),
    ('\u{2F1E}', "<compat> 56D7"),
    ('\u{2F1F}', "<compat> 571F"),
    ('\u{2F20}', "<compat> 58EB"),
    ('\u{2F21}', "<compat> 5902"),
    ('\u{2F22}', "<compat> 590A"),
    ('\u{2F23}', "<compat> 5915"),
    ('\u{2F24}', "<compat> 5927"),
    ('\u{2F25}', "<compat> 5973"),
    ('\u{2F26}', "<compat> 5B50"),
    ('\u{2F27}', "<compat> 5B80"),
    ('\u{2F28}', "<compat> 5BF8"),
    ('\u{2F29}', "<compat> 5C0F"),
    ('\u{2F2A}', "<compat> 5C22"),
    ('\u{2F2B}', "<compat> 5C38"),
    ('\u{2F2C}', "<compat> 5C6E"),
    ('\u{2F2D}', "<compat> 5C71"),
    ('\u{2F2E}', "<compat> 5DDB"),
    ('\u{2F2F}', "<compat> 5DE5"),
    ('\u{2F30}', "<compat> 5DF1"),
    ('\u{2F31}', "<compat> 5DFE"),
    ('\u{2F32}', "<compat> 5E72"),
    ('\u{2F33}', "<compat> 5E7A"),
    ('\u{2F34}', "<compat> 5E7F"),
    ('\u{2F35}', "<compat> 5EF4"),
    ('\u{2F36}', "<compat> 5EFE"),
    ('\u{2F37}', "<compat> 5F0B"),
    ('\u{2F38}', "<compat> 5F13"),
    ('\u{2F39}', "<compat> 5F50"),
    ('\u{2F3A}', "<compat> 5F61"),
    ('\u{2F3B}', "<compat> 5F73"),
    ('\u{2F3C}', "<compat> 5FC3"),
    ('\u{2F3D}', "<compat> 6208"),
    ('\u{2F3E}', "<compat> 6236"),
    ('\u{2F3F}', "<compat> 624B"),
    ('\u{2F40}', "<compat> 652F"),
    ('\u{2F41}', "<compat> 6534"),
    ('\u{2F42}', "<compat> 6587"),
    ('\u{2F43}', "<compat> 6597"),
    ('\u{2F44}', "<compat> 65A4"),
    ('\u{2F45}', "<compat> 65B9"),
    ('\u{2F46}', "<compat> 65E0"),
    ('\u{2F47}', "<compat> 65E5"),
    ('\u{2F48}', "<compat> 66F0"),
    ('\u{2F49}', "<compat> 6708"),
    ('\u{2F4A}', "<compat> 6728"),
    ('\u{2F4B}', "<compat> 6B20"),
    ('\u{2F4C}', "<compat> 6B62"),
    ('\u{2F4D}', "<compat> 6B79"),
    ('\u{2F4E}', "<compat> 6BB3"),
    ('\u{2F4F}', "<compat> 6BCB"),
    ('\u{2F50}', "<compat> 6BD4"),
    ('\u{2F51}', "<compat> 6BDB"),
    ('\u{2F52}', "<compat> 6C0F"),
    ('\u{2F53}', "<compat> 6C14"),
    ('\u{2F54}', "<compat> 6C34"),
    ('\u{2F55}', "<compat> 706B"),
    ('\u{2F56}', "<compat> 722A"),
    ('\u{2F57}', "<compat> 7236"),
    ('\u{2F58}', "<compat> 723B"),
    ('\u{2F59}', "<compat> 723F"),
    ('\u{2F5A}', "<compat> 7247"),
    ('\u{2F5B}', "<compat> 7259"),
    ('\u{2F5C}', "<compat> 725B"),
    ('\u{2F5D}', "<compat> 72AC"),
    ('\u{2F5E}', "<compat> 7384"),
    ('\u{2F5F}', "<compat> 7389"),
    ('\u{2F60}', "<compat> 74DC"),
    ('\u{2F61}', "<compat> 74E6"),
    ('\u{2F62}', "<compat> 7518"),
    ('\u{2F63}', "<compat> 751F"),
    ('\u{2F64}', "<compat> 7528"),
    ('\u{2F65}', "<compat> 7530"),
    ('\u{2F66}', "<compat> 758B"),
    ('\u{2F67}', "<compat> 7592"),
    ('\u{2F68}', "<compat> 7676"),
    ('\u{2F69}', "<compat> 767D"),
    ('\u{2F6A}', "<compat> 76AE"),
    ('\u{2F6B}', "<compat> 76BF"),
    ('\u{2F6C}', "<compat> 76EE"),
    ('\u{2F6D}', "<compat> 77DB"),
    ('\u{2F6E}', "<compat> 77E2"),
    ('\u{2F6F}', "<compat> 77F3"),
    ('\u{2F70}', "<compat> 793A"),
    ('\u{2F71}', "<compat> 79B8"),
    ('\u{2F72}', "<compat> 79BE"),
    ('\u{2F73}', "<compat> 7A74"),
    ('\u{2F74}', "<compat> 7ACB"),
    ('\u{2F75}', "<compat> 7AF9"),
    ('\u{2F76}', "<compat> 7C73"),
    ('\u{2F77}', "<compat> 7CF8"),
    ('\u{2F78}', "<compat> 7F36"),
    ('\u{2F79}', "<compat> 7F51"),
    ('\u{2F7A}', "<compat> 7F8A"),
    ('\u{2F7B}', "<compat> 7FBD"),
    ('\u{2F7C}', "<compat> 8001"),
    ('\u{2F7D}', "<compat> 800C"),
    ('\u{2F7E}', "<compat> 8012"),
    ('\u{2F7F}', "<compat> 8033"),
    ('\u{2F80}', "<compat> 807F"),
    ('\u{2F81}', "<compat> 8089"),
    ('\u{2F82}', "<compat> 81E3"),
    ('\u{2F83}', "<compat> 81EA"),
    ('\u{2F84}', "<compat> 81F3"),
    ('\u{2F85}', "<compat> 81FC"),
    ('\u{2F86}', "<compat> 820C"),
    ('\u{2F87}', "<compat> 821B"),
    ('\u{2F88}', "<compat> 821F"),
    ('\u{2F89}', "<compat> 826E"),
    ('\u{2F8A}', "<compat> 8272"),
    ('\u{2F8B}', "<compat> 8278"),
    ('\u{2F8C}', "<compat> 864D"),
    ('\u{2F8D}', "<compat> 866B"),
    ('\u{2F8E}', "<compat> 8840"),
    ('\u{2F8F}', "<compat> 884C"),
    ('\u{2F90}', "<compat> 8863"),
    ('\u{2F91}', "<compat> 897E"),
    ('\u{2F92}', "<compat> 898B"),
    ('\u{2F93}', "<compat> 89D2"),
    ('\u{2F94}', "<compat> 8A00"),
    ('\u{2F95}', "<compat> 8C37"),
    ('\u{2F96}', "<compat> 8C46"),
    ('\u{2F97}', "<compat> 8C55"),
    ('\u{2F98}', "<compat> 8C78"),
    ('\u{2F99}', "<compat> 8C9D"),
    ('\u{2F9A}', "<compat> 8D64"),
    ('\u{2F9B}', "<compat> 8D70"),
    ('\u{2F9C}', "<compat> 8DB3"),
    ('\u{2F9D}', "<compat> 8EAB"),
    ('\u{2F9E}', "<compat> 8ECA"),
    ('\u{2F9F}', "<compat> 8F9B"),
    ('\u{2FA0}', "<compat> 8FB0"),
    ('\u{2FA1}', "<compat> 8FB5"),
    ('\u{2FA2}', "<compat> 9091"),
    ('\u{2FA3}', "<compat> 9149"),
    ('\u{2FA4}', "<compat> 91C6"),
    ('\u{2FA5}', "<compat> 91CC"),
    ('\u{2FA6}', "<compat> 91D1"),
    ('\u{2FA7}', "<compat> 9577"),
    ('\u{2FA8}', "<compat> 9580"),
    ('\u{2FA9}', "<compat> 961C"),
    ('\u{2FAA}', "<compat> 96B6"),
    ('\u{2FAB}', "<compat> 96B9"),
    ('\u{2FAC}', "<compat> 96E8"),
    ('\u{2FAD}', "<compat> 9751"),
    ('\u{2FAE}', "<compat> 975E"),
    ('\u{2FAF}', "<compat> 9762"),
    ('\u{2FB0}', "<compat> 9769"),
    ('\u{2FB1}', "<compat> 97CB"),
    ('\u{2FB2}', "<compat> 97ED"),
    ('\u{2FB3}', "<compat> 97F3"),
    ('\u{2FB4}', "<compat> 9801"),
    ('\u{2FB5}', "<compat> 98A8"),
    ('\u{2FB6}', "<compat> 98DB"),
    ('\u{2FB7}', "<compat> 98DF"),
    ('\u{2FB8}', "<compat> 9996"),
    ('\u{2FB9}', "<compat> 9999"),
    ('\u{2FBA}', "<compat> 99AC"),
    ('\u{2FBB}', "<compat> 9AA8"),
    ('\u{2FBC}', "<compat> 9AD8"),
    ('\u{2FBD}', "<compat> 9ADF"),
    ('\u{2FBE}', "<compat> 9B25"),
    ('\u{2FBF}', "<compat> 9B2F"),
    ('\u{2FC0}', "<compat> 9B32"),
    ('\u{2FC1}', "<compat> 9B3C"),
    ('\u{2FC2}', "<compat> 9B5A"),
    ('\u{2FC3}', "<compat> 9CE5"),
    ('\u{2FC4}', "<compat> 9E75"),
    ('\u{2FC5}', "<compat> 9E7F"),
    ('\u{2FC6}', "<compat> 9EA5"),
    ('\u{2FC7}', "<compat> 9EBB"),
    ('\u{2FC8}', "<compat> 9EC3"),
    ('\u{2FC9}', "<compat> 9ECD"),
    ('\u{2FCA}', "<compat> 9ED1"),
    ('\u{2FCB}', "<compat> 9EF9"),
    ('\u{2FCC}', "<compat> 9EFD"),
    ('\u{2FCD}', "<compat> 9F0E"),
    ('\u{2FCE}', "<compat> 9F13"),
    ('\u{2FCF}', "<compat> 9F20"),
    ('\u{2FD0}', "<compat> 9F3B"),
    ('\u{2FD1}', "<compat> 9F4A"),
    ('\u{2FD2}', "<compat> 9F52"),
    ('\u{2FD3}', "<compat> 9F8D"),
    ('\u{2FD4}', "<compat> 9F9C"),
    ('\u{2FD5}', "<compat> 9FA0"),
    ('\u{3000}', "<wide> 0020"),
    ('\u{3036}', "<compat> 3012"),
    ('\u{3038}', "<compat> 5341"),
    ('\u{3039}', "<compat> 5344"),
    ('\u{303A}', "<compat> 5345"),
    ('\u{304C}', "304B 3099"),
    ('\u{304E}', "304D 3099"),
    ('\u{3050}', "304F 3099"),
    ('\u{3052}', "3051 3099"),
    ('\u{3054}', "3053 3099"),
    ('\u{3056}', "3055 3099"),
    ('\u{3058}', "3057 3099"),
    ('\u{305A}', "3059 3099"),
    ('\u{305C}', "305B 3099"),
    ('\u{305E}', "305D 3099"),
    ('\u{3060}', "305F 3099"),
    ('\u{3062}', "3061 3099"),
    ('\u{3065}', "3064 3099"),
    ('\u{3067}', "3066 3099"),
    ('\u{3069}', "3068 3099"),
    ('\u{3070}', "306F 3099"),
    ('\u{3071}', "306F 309A"),
    ('\u{3073}', "3072 3099"),
    ('\u{3074}', "3072 309A"),
    ('\u{3076}', "3075 3099"),
    ('\u{3077}', "3075 309A"),
    ('\u{3079}', "3078 3099"),
    ('\u{307A}', "3078 309A"),
    ('\u{307C}', "307B 3099"),
    ('\u{307D}', "307B 309A"),
    ('\u{3094}', "3046 3099"),
    ('\u{309B}', "<compat> 0020 3099"),
    ('\u{309C}', "<compat> 0020 309A"),
    ('\u{309E}', "309D 3099"),
    ('\u{309F}', "<vertical> 3088 308A"),
    ('\u{30AC}', "30AB 3099"),
    ('\u{30AE}', "30AD 3099"),
    ('\u{30B0}', "30AF 3099"),
    ('\u{30B2}', "30B1 3099"),
    ('\u{30B4}', "30B3 3099"),
    ('\u{30B6}', "30B5 3099"),
    ('\u{30B8}', "30B7 3099"),
    ('\u{30BA}', "30B9 3099"),
    ('\u{30BC}', "30BB 3099"),
    ('\u{30BE}', "30BD 3099"),
    ('\u{30C0}', "30BF 3099"),
    ('\u{30C2}', "30C1 3099"),
    ('\u{30C5}', "30C4 3099"),
    ('\u{30C7}', "30C6 3099"),
    ('\u{30C9}', "30C8 3099"),
    ('\u{30D0}', "30CF 3099"),
    ('\u{30D1}', "30CF 309A"),
    ('\u{30D3}', "30D2 3099"),
    ('\u{30D4}', "30D2 309A"),
    ('\u{30D6}', "30D5 3099"),
    ('\u{30D7}', "30D5 309A"),
    ('\u{30D9}', "30D8 3099"),
    ('\u{30DA}', "30D8 309A"),
    ('\u{30DC}', "30DB 3099"),
    ('\u{30DD}', "30DB 309A"),
    ('\u{30F4}', "30A6 3099"),
    ('\u{30F7}', "30EF 3099"),
    ('\u{30F8}', "30F0 3099"),
    ('\u{30F9}', "30F1 3099"),
    ('\u{30FA}', "30F2 3099"),
    ('\u{30FE}', "30FD 3099"),
    ('\u{30FF}', "<vertical> 30B3 30C8"),
    ('\u{3131}', "<compat> 1100"),
    ('\u{3132}', "<compat> 1101"),
    ('\u{3133}', "<compat> 11AA"),
    ('\u{3134}', "<compat> 1102"),
    ('\u{3135}', "<compat> 11AC"),
    ('\u{3136}', "<compat> 11AD"),
    ('\u{3137}', "<compat> 1103"),
    ('\u{3138}', "<compat> 1104"),
    ('\u{3139}', "<compat> 1105"),
    ('\u{313A}', "<compat> 11B0"),
    ('\u{313B}', "<compat> 11B1"),
    ('\u{313C}', "<compat> 11B2"),
    ('\u{313D}', "<compat> 11B3"),
    ('\u{313E}', "<compat> 11B4"),
    ('\u{313F}', "<compat> 11B5"),
    ('\u{3140}', "<compat> 111A"),
    ('\u{3141}', "<compat> 1106"),
    ('\u{3142}', "<compat> 1107"),
    ('\u{3143}', "<compat> 1108"),
    ('\u{3144}', "<compat> 1121"),
    ('\u{3145}', "<compat> 1109"),
    ('\u{3146}', "<compat> 110A"),
    ('\u{3147}', "<compat> 110B"),
    ('\u{3148}', "<compat> 110C"),
    ('\u{3149}', "<compat> 110D"),
    ('\u{314A}', "<compat> 110E"),
    ('\u{314B}', "<compat> 110F"),
    ('\u{314C}', "<compat> 1110"),
    ('\u{314D}', "<compat> 1111"),
    ('\u{314E}', "<compat> 1112"),
    ('\u{314F}', "<compat> 1161"),
    ('\u{3150}', "<compat> 1162"),
    ('\u{3151}', "<compat> 1163"),
    ('\u{3152}', "<compat> 1164"),
    ('\u{3153}', "<compat> 1165"),
    ('\u{3154}', "<compat> 1166"),
    ('\u{3155}', "<compat> 1167"),
    ('\u{3156}', "<compat> 1168"),
    ('\u{3157}', "<compat> 1169"),
    ('\u{3158}', "<compat> 116A"),
    ('\u{3159}', "<compat> 116B"),
    ('\u{315A}', "<compat> 116C"),
    ('\u{315B}', "<compat> 116D"),
    ('\u{315C}', "<compat> 116E"),
    ('\u{315D}', "<compat> 116F"),
    ('\u{315E}', "<compat> 1170"),
    ('\u{315F}', "<compat> 1171"),
    ('\u{3160}', "<compat> 1172"),
    ('\u{3161}', "<compat> 1173"),
    ('\u{3162}', "<compat> 1174"),
    ('\u{3163}', "<compat> 1175"),
    ('\u{3164}', "<compat> 1160"),
    ('\u{3165}', "<compat> 1114"),
    ('\u{3166}', "<compat> 1115"),
    ('\u{3167}', "<compat> 11C7"),
    ('\u{3168}', "<compat> 11C8"),
    ('\u{3169}', "<compat> 11CC"),
    ('\u{316A}', "<compat> 11CE"),
    ('\u{316B}', "<compat> 11D3"),
    ('\u{316C}', "<compat> 11D7"),
    ('\u{316D}', "<compat> 11D9"),
    ('\u{316E}', "<compat> 111C"),
    ('\u{316F}', "<compat> 11DD"),
    ('\u{3170}', "<compat> 11DF"),
    ('\u{3171}', "<compat> 111D"),
    ('\u{3172}', "<compat> 111E"),
    ('\u{3173}', "<compat> 1120"),
    ('\u{3174}', "<compat> 1122"),
    ('\u{3175}', "<compat> 1123"),
    ('\u{3176}', "<compat> 1127"),
    ('\u{3177}', "<compat> 1129"),
    ('\u{3178}', "<compat> 112B"),
    ('\u{3179}', "<compat> 112C"),
    ('\u{317A}', "<compat> 112D"),
    ('\u{317B}', "<compat> 112E"),
    ('\u{317C}', "<compat> 112F"),
    ('\u{317D}', "<compat> 1132"),
    ('\u{317E}', "<compat> 1136"),
    ('\u{317F}', "<compat> 1140"),
    ('\u{3180}', "<compat> 1147"),
    ('\u{3181}', "<compat> 114C"),
    ('\u{3182}', "<compat> 11F1"),
    ('\u{3183}', "<compat> 11F2"),
    ('\u{3184}', "<compat> 1157"),
    ('\u{3185}', "<compat> 1158"),
    ('\u{3186}', "<compat> 1159"),
    ('\u{3187}', "<compat> 1184"),
    ('\u{3188}', "<compat> 1185"),
    ('\u{3189}', "<compat> 1188"),
    ('\u{318A}', "<compat> 1191"),
    ('\u{318B}', "<compat> 1192"),
    ('\u{318C}', "<compat> 1194"),
    ('\u{318D}', "<compat> 119E"),
    ('\u{318E}', "<compat> 11A1"),
    ('\u{3192}', "<super> 4E00"),
    ('\u{3193}', "<super> 4E8C"),
    ('\u{3194}', "<super> 4E09"),
    ('\u{3195}', "<super> 56DB"),
    ('\u{3196}', "<super> 4E0A"),
    ('\u{3197}', "<super> 4E2D"),
    ('\u{3198}', "<super> 4E0B"),
    ('\u{3199}', "<super> 7532"),
    ('\u{319A}', "<super> 4E59"),
    ('\u{319B}', "<super> 4E19"),
    ('\u{319C}', "<super> 4E01"),
    ('\u{319D}', "<super> 5929"),
    ('\u{319E}', "<super> 5730"),
    ('\u{319F}', "<super> 4EBA"),
    ('\u{3200}', "<compat> 0028 1100 0029"),
    ('\u{3201}', "<compat> 0028 1102 0029"),
    ('\u{3202}', "<compat> 0028 1103 0029"),
    ('\u{3203}', "<compat> 0028 1105 0029"),
    ('\u{3204}', "<compat> 0028 1106 0029"),
    ('\u{3205}', "<compat> 0028 1107 0029"),
    ('\u{3206}', "<compat> 0028 1109 0029"),
    ('\u{3207}', "<compat> 0028 110B 0029"),
    ('\u{3208}', "<compat> 0028 110C 0029"),
    ('\u{3209}', "<compat> 0028 110E 0029"),
    ('\u{320A}', "<compat> 0028 110F 0029"),
    ('\u{320B}', "<compat> 0028 1110 0029"),
    ('\u{320C}', "<compat> 0028 1111 0029"),
    ('\u{320D}', "<compat> 0028 1112 0029"),
    ('\u{320E}', "<compat> 0028 1100 1161 0029"),
    ('\u{320F}', "<compat> 0028 1102 1161 0029"),
    ('\u{3210}', "<compat> 0028 1103 1161 0029"),
    ('\u{3211}', "<compat> 0028 1105 1161 0029"),
    ('\u{3212}', "<compat> 0028 1106 1161 0029"),
    ('\u{3213}', "<compat> 0028 1107 1161 0029"),
    ('\u{3214}', "<compat> 0028 1109 1161 0029"),
    ('\u{3215}', "<compat> 0028 110B 1161 0029"),
    ('\u{3216}', "<compat> 0028 110C 1161 0029"),
    ('\u{3217}', "<compat> 0028 110E 1161 0029"),
    ('\u{3218}', "<compat> 0028 110F 1161 0029"),
    ('\u{3219}', "<compat> 0028 1110 1161 0029"),
    ('\u{321A}', "<compat> 0028 1111 1161 0029"),
    ('\u{321B}', "<compat> 0028 1112 1161 0029"),
    ('\u{321C}', "<compat> 0028 110C 116E 0029"),
    ('\u{321D}', "<compat> 0028 110B 1169 110C 1165 11AB 0029"),
    ('\u{321E}', "<compat> 0028 110B 1169 1112 116E 0029"),
    ('\u{3220}', "<compat> 0028 4E00 0029"),
    ('\u{3221}', "<compat> 0028 4E8C 0029"),
    ('\u{3222}', "<compat> 0028 4E09 0029"),
    ('\u{3223}', "<compat> 0028 56DB 0029"),
    ('\u{3224}', "<compat> 0028 4E94 0029"),
    ('\u{3225}', "<compat> 0028 516D 0029"),
    ('\u{3226}', "<compat> 0028 4E03 0029"),
    ('\u{3227}', "<compat> 0028 516B 0029"),
    ('\u{3228}', "<compat> 0028 4E5D 0029"),
    ('\u{3229}', "<compat> 0028 5341 0029"),
    ('\u{322A}', "<compat> 0028 6708 0029"),
    ('\u{322B}', "<compat> 0028 706B 0029"),
    ('\u{322C}', "<compat> 0028 6C34 0029"),
    ('\u{322D}', "<compat> 0028 6728 0029"),
    ('\u{322E}', "<compat> 0028 91D1 0029"),
    ('\u{322F}', "<compat> 0028 571F 0029"),
    ('\u{3230}', "<compat> 0028 65E5 0029"),
    ('\u{3231}', "<compat> 0028 682A 0029"),
    ('\u{3232}', "<compat> 0028 6709 0029"),
    ('\u{3233}', "<compat> 0028 793E 0029"),
    ('\u{3234}', "<compat> 0028 540D 0029"),
    ('\u{3235}', "<compat> 0028 7279 0029"),
    ('\u{3236}', "<compat> 0028 8CA1 0029"),
    ('\u{3237}', "<compat> 0028 795D 0029"),
    ('\u{3238}', "<compat> 0028 52B4 0029"),
    ('\u{3239}', "<compat> 0028 4EE3 0029"),
    ('\u{323A}', "<compat> 0028 547C 0029"),
    ('\u{323B}', "<compat> 0028 5B66 0029"),
    ('\u{323C}', "<compat> 0028 76E3 0029"),
    ('\u{323D}', "<compat> 0028 4F01 0029"),
    ('\u{323E}', "<compat> 0028 8CC7 0029"),
    ('\u{323F}', "<compat> 0028 5354 0029"),
    ('\u{3240}', "<compat> 0028 796D 0029"),
    ('\u{3241}', "<compat> 0028 4F11 0029"),
    ('\u{3242}', "<compat> 0028 81EA 0029"),
    ('\u{3243}', "<compat> 0028 81F3 0029"),
    ('\u{3244}', "<circle> 554F"),
    ('\u{3245}', "<circle> 5E7C"),
    ('\u{3246}', "<circle> 6587"),
    ('\u{3247}', "<circle> 7B8F"),
    ('\u{3250}', "<square> 0050 0054 0045"),
    ('\u{3251}', "<circle> 0032 0031"),
    ('\u{3252}', "<circle> 0032 0032"),
    ('\u{3253}', "<circle> 0032 0033"),
    ('\u{3254}', "<circle> 0032 0034"),
    ('\u{3255}', "<circle> 0032 0035"),
    ('\u{3256}', "<circle> 0032 0036"),
    ('\u{3257}', "<circle> 0032 0037"),
    ('\u{3258}', "<circle> 0032 0038"),
    ('\u{3259}', "<circle> 0032 0039"),
    ('\u{325A}', "<circle> 0033 0030"),
    ('\u{325B}', "<circle> 0033 0031"),
    ('\u{325C}', "<circle> 0033 0032"),
    ('\u{325D}', "<circle> 0033 0033"),
    ('\u{325E}', "<circle> 0033 0034"),
    ('\u{325F}', "<circle> 0033 0035"),
    ('\u{3260}', "<circle> 1100"),
    ('\u{3261}', "<circle> 1102"),
    ('\u{3262}', "<circle> 1103"),
    ('\u{3263}', "<circle> 1105"),
    ('\u{3264}', "<circle> 1106"),
    ('\u{3265}', "<circle> 1107"),
    ('\u{3266}', "<circle> 1109"),
    ('\u{3267}', "<circle> 110B"),
    ('\u{3268}', "<circle> 110C"),
    ('\u{3269}', "<circle> 110E"),
    ('\u{326A}', "<circle> 110F"),
    ('\u{326B}', "<circle> 1110"),
    ('\u{326C}', "<circle> 1111"),
    ('\u{326D}', "<circle> 1112"),
    ('\u{326E}', "<circle> 1100 1161"),
    ('\u{326F}', "<circle> 1102 1161"),
    ('\u{3270}', "<circle> 1103 1161"),
    ('\u{3271}', "<circle> 1105 1161"),
    ('\u{3272}', "<circle> 1106 1161"),
    ('\u{3273}', "<circle> 1107 1161"),
    ('\u{3274}', "<circle> 1109 1161"),
    ('\u{3275}', "<circle> 110B 1161"),
    ('\u{3276}', "<circle> 110C 1161"),
    ('\u{3277}', "<circle> 110E 1161"),
    ('\u{3278}', "<circle> 110F 1161"),
    ('\u{3279}', "<circle> 1110 1161"),
    ('\u{327A}', "<circle> 1111 1161"),
    ('\u{327B}', "<circle> 1112 1161"),
    ('\u{327C}', "<circle> 110E 1161 11B7 1100 1169"),
    ('\u{327D}', "<circle> 110C 116E 110B 1174"),
    ('\u{327E}', "<circle> 110B 116E"),
    ('\u{3280}', "<circle> 4E00"),
    ('\u{3281}', "<circle> 4E8C"),
    ('\u{3282}', "<circle> 4E09"),
    ('\u{3283}', "<circle> 56DB"),
    ('\u{3284}', "<circle> 4E94"),
    ('\u{3285}', "<circle> 516D"),
    ('\u{3286}', "<circle> 4E03"),
    ('\u{3287}', "<circle> 516B"),
    ('\u{3288}', "<circle> 4E5D"),
    ('\u{3289}', "<circle> 5341"),
    ('\u{328A}', "<circle> 6708"),
    ('\u{328B}', "<circle> 706B"),
    ('\u{328C}', "<circle> 6C34"),
    ('\u{328D}', "<circle> 6728"),
    ('\u{328E}', "<circle> 91D1"),
    ('\u{328F}', "<circle> 571F"),
    ('\u{3290}', "<circle> 65E5"),
    ('\u{3291}', "<circle> 682A"),
    ('\u{3292}', "<circle> 6709"),
    ('\u{3293}', "<circle> 793E"),
    ('\u{3294}', "<circle> 540D"),
    ('\u{3295}', "<circle> 7279"),
    ('\u{3296}', "<circle> 8CA1"),
    ('\u{3297}', "<circle> 795D"),
    ('\u{3298}', "<circle> 52B4"),
    ('\u{3299}', "<circle> 79D8"),
    ('\u{329A}', "<circle> 7537"),
    ('\u{329B}', "<circle> 5973"),
    ('\u{329C}', "<circle> 9069"),
    ('\u{329D}', "<circle> 512A"),
    ('\u{329E}', "<circle> 5370"),
    ('\u{329F}', "<circle> 6CE8"),
    ('\u{32A0}', "<circle> 9805"),
    ('\u{32A1}', "<circle> 4F11"),
    ('\u{32A2}', "<circle> 5199"),
    ('\u{32A3}', "<circle> 6B63"),
    ('\u{32A4}', "<circle> 4E0A"),
    ('\u{32A5}', "<circle> 4E2D"),
    ('\u{32A6}', "<circle> 4E0B"),
    ('\u{32A7}', "<circle> 5DE6"),
    ('\u{32A8}', "<circle> 53F3"),
    ('\u{32A9}', "<circle> 533B"),
    ('\u{32AA}', "<circle> 5B97"),
    ('\u{32AB}', "<circle> 5B66"),
    ('\u{32AC}', "<circle> 76E3"),
    ('\u{32AD}', "<circle> 4F01"),
    ('\u{32AE}', "<circle> 8CC7"),
    ('\u{32AF}', "<circle> 5354"),
    ('\u{32B0}', "<circle> 591C"),
    ('\u{32B1}', "<circle> 0033 0036"),
    ('\u{32B2}', "<circle> 0033 0037"),
    ('\u{32B3}', "<circle> 0033 0038"),
    ('\u{32B4}', "<circle> 0033 0039"),
    ('\u{32B5}', "<circle> 0034 0030"),
    ('\u{32B6}', "<circle> 0034 0031"),
    ('\u{32B7}', "<circle> 0034 0032"),
    ('\u{32B8}', "<circle> 0034 0033"),
    ('\u{32B9}', "<circle> 0034 0034"),
    ('\u{32BA}', "<circle> 0034 0035"),
    ('\u{32BB}', "<circle> 0034 0036"),
    ('\u{32BC}', "<circle> 0034 0037"),
    ('\u{32BD}', "<circle> 0034 0038"),
    ('\u{32BE}', "<circle> 0034 0039"),
    ('\u{32BF}', "<circle> 0035 0030"),
    ('\u{32C0}', "<compat> 0031 6708"),
    ('\u{32C1}', "<compat> 0032 6708"),
    ('\u{32C2}', "<compat> 0033 6708"),
    ('\u{32C3}', "<compat> 0034 6708"),
    ('\u{32C4}', "<compat> 0035 6708"),
    ('\u{32C5}', "<compat> 0036 6708"),
    ('\u{32C6}', "<compat> 0037 6708"),
    ('\u{32C7}', "<compat> 0038 6708"),
    ('\u{32C8}', "<compat> 0039 6708"),
    ('\u{32C9}', "<compat> 0031 0030 6708"),
    ('\u{32CA}', "<compat> 0031 0031 6708"),
    ('\u{32CB}', "<compat> 0031 0032 6708"),
    ('\u{32CC}', "<square> 0048 0067"),
    ('\u{32CD}', "<square> 0065 0072 0067"),
    ('\u{32CE}', "<square> 0065 0056"),
    ('\u{32CF}', "<square> 004C 0054 0044"),
    ('\u{32D0}', "<circle> 30A2"),
    ('\u{32D1}', "<circle> 30A4"),
    ('\u{32D2}', "<circle> 30A6"),
    ('\u{32D3}', "<circle> 30A8"),
    ('\u{32D4}', "<circle> 30AA"),
    ('\u{32D5}', "<circle> 30AB"),
    ('\u{32D6}', "<circle> 30AD"),
    ('\u{32D7}', "<circle> 30AF"),
    ('\u{32D8}', "<circle> 30B1"),
    ('\u{32D9}', "<circle> 30B3"),
    ('\u{32DA}', "<circle> 30B5"),
    ('\u{32DB}', "<circle> 30B7"),
    ('\u{32DC}', "<circle> 30B9"),
    ('\u{32DD}', "<circle> 30BB"),
    ('\u{32DE}', "<circle> 30BD"),
    ('\u{32DF}', "<circle> 30BF"),
    ('\u{32E0}', "<circle> 30C1"),
    ('\u{32E1}', "<circle> 30C4"),
    ('\u{32E2}', "<circle> 30C6"),
    ('\u{32E3}', "<circle> 30C8"),
    ('\u{32E4}', "<circle> 30CA"),
    ('\u{32E5}', "<circle> 30CB"),
    ('\u{32E6}', "<circle> 30CC"),
    ('\u{32E7}', "<circle> 30CD"),
    ('\u{32E8}', "<circle> 30CE"),
    ('\u{32E9}', "<circle> 30CF"),
    ('\u{32EA}', "<circle> 30D2"),
    ('\u{32EB}', "<circle> 30D5"),
    ('\u{32EC}', "<circle> 30D8"),
    ('\u{32ED}', "<circle> 30DB"),
    ('\u{32EE}', "<circle> 30DE"),
    ('\u{32EF}', "<circle> 30DF"),
    ('\u{32F0}', "<circle> 30E0"),
    ('\u{32F1}', "<circle> 30E1"),
    ('\u{32F2}', "<circle> 30E2"),
    ('\u{32F3}', "<circle> 30E4"),
    ('\u{32F4}', "<circle> 30E6"),
    ('\u{32F5}', "<circle> 30E8"),
    ('\u{32F6}', "<circle> 30E9"),
    ('\u{32F7}', "<circle> 30EA"),
    ('\u{32F8}', "<circle> 30EB"),
    ('\u{32F9}', "<circle> 30EC"),
    ('\u{32FA}', "<circle> 30ED"),
    ('\u{32FB}', "<circle> 30EF"),
    ('\u{32FC}', "<circle> 30F0"),
    ('\u{32FD}', "<circle> 30F1"),
    ('\u{32FE}', "<circle> 30F2"),
    ('\u{32FF}', "<square> 4EE4 548C"),
    ('\u{3300}', "<square> 30A2 30D1 30FC 30C8"),
    ('\u{3301}', "<square> 30A2 30EB 30D5 30A1"),
    ('\u{3302}', "<square> 30A2 30F3 30DA 30A2"),
    ('\u{3303}', "<square> 30A2 30FC 30EB"),
    ('\u{3304}', "<square> 30A4 30CB 30F3 30B0"),
    ('\u{3305}', "<square> 30A4 30F3 30C1"),
    ('\u{3306}', "<square> 30A6 30A9 30F3"),
    ('\u{3307}', "<square> 30A8 30B9 30AF 30FC 30C9"),
    ('\u{3308}', "<square> 30A8 30FC 30AB 30FC"),
    ('\u{3309}', "<square> 30AA 30F3 30B9"),
    ('\u{330A}', "<square> 30AA 30FC 30E0"),
    ('\u{330B}', "<square> 30AB 30A4 30EA"),
    ('\u{330C}', "<square> 30AB 30E9 30C3 30C8"),
    ('\u{330D}', "<square> 30AB 30ED 30EA 30FC"),
    ('\u{330E}', "<square> 30AC 30ED 30F3"),
    ('\u{330F}', "<square> 30AC 30F3 30DE"),
    ('\u{3310}', "<square> 30AE 30AC"),
    ('\u{3311}', "<square> 30AE 30CB 30FC"),
    ('\u{3312}', "<square> 30AD 30E5 30EA 30FC"),
    ('\u{3313}', "<square> 30AE 30EB 30C0 30FC"),
    ('\u{3314}', "<square> 30AD 30ED"),
    ('\u{3315}', "<square> 30AD 30ED 30B0 30E9 30E0"),
    ('\u{3316}', "<square> 30AD 30ED 30E1 30FC 30C8 30EB"),
    ('\u{3317}', "<square> 30AD 30ED 30EF 30C3 30C8"),
    ('\u{3318}', "<square> 30B0 30E9 30E0"),
    ('\u{3319}', "<square> 30B0 30E9 30E0 30C8 30F3"),
    ('\u{331A}', "<square> 30AF 30EB 30BC 30A4 30ED"),
    ('\u{331B}', "<square> 30AF 30ED 30FC 30CD"),
    ('\u{331C}', "<square> 30B1 30FC 30B9"),
    ('\u{331D}', "<square> 30B3 30EB 30CA"),
    ('\u{331E}', "<square> 30B3 30FC 30DD"),
    ('\u{331F}', "<square> 30B5 30A4 30AF 30EB"),
    ('\u{3320}', "<square> 30B5 30F3 30C1 30FC 30E0"),
    ('\u{3321}', "<square> 30B7 30EA 30F3 30B0"),
    ('\u{3322}', "<square> 30BB 30F3 30C1"),
    ('\u{3323}', "<square> 30BB 30F3 30C8"),
    ('\u{3324}', "<square> 30C0 30FC 30B9"),
    ('\u{3325}', "<square> 30C7 30B7"),
    ('\u{3326}', "<square> 30C9 30EB"),
    ('\u{3327}', "<square> 30C8 30F3"),
    ('\u{3328}', "<square> 30CA 30CE"),
    ('\u{3329}', "<square> 30CE 30C3 30C8"),
    ('\u{332A}', "<square> 30CF 30A4 30C4"),
    ('\u{332B}', "<square> 30D1 30FC 30BB 30F3 30C8"),
    ('\u{332C}', "<square> 30D1 30FC 30C4"),
    ('\u{332D}', "<square> 30D0 30FC 30EC 30EB"),
    ('\u{332E}', "<square> 30D4 30A2 30B9 30C8 30EB"),
    ('\u{332F}', "<square> 30D4 30AF 30EB"),
    ('\u{3330}', "<square> 30D4 30B3"),
    ('\u{3331}', "<square> 30D3 30EB"),
    ('\u{3332}', "<square> 30D5 30A1 30E9 30C3 30C9"),
    ('\u{3333}', "<square> 30D5 30A3 30FC 30C8"),
    ('\u{3334}', "<square> 30D6 30C3 30B7 30A7 30EB"),
    ('\u{3335}', "<square> 30D5 30E9 30F3"),
    ('\u{3336}', "<square> 30D8 30AF 30BF 30FC 30EB"),
    ('\u{3337}', "<square> 30DA 30BD"),
    ('\u{3338}', "<square> 30DA 30CB 30D2"),
    ('\u{3339}', "<square> 30D8 30EB 30C4"),
    ('\u{333A}', "<square> 30DA 30F3 30B9"),
    ('\u{333B}', "<square> 30DA 30FC 30B8"),
    ('\u{333C}', "<square> 30D9 30FC 30BF"),
    ('\u{333D}', "<square> 30DD 30A4 30F3 30C8"),
    ('\u{333E}', "<square> 30DC 30EB 30C8"),
    ('\u{333F}', "<square> 30DB 30F3"),
    ('\u{3340}', "<square> 30DD 30F3 30C9"),
    ('\u{3341}', "<square> 30DB 30FC 30EB"),
    ('\u{3342}', "<square> 30DB 30FC 30F3"),
    ('\u{3343}', "<square> 30DE 30A4 30AF 30ED"),
    ('\u{3344}', "<square> 30DE 30A4 30EB"),
    ('\u{3345}', "<square> 30DE 30C3 30CF"),
    ('\u{3346}', "<square> 30DE 30EB 30AF"),
    ('\u{3347}', "<square> 30DE 30F3 30B7 30E7 30F3"),
    ('\u{3348}', "<square> 30DF 30AF 30ED 30F3"),
    ('\u{3349}', "<square> 30DF 30EA"),
    ('\u{334A}', "<square> 30DF 30EA 30D0 30FC 30EB"),
    ('\u{334B}', "<square> 30E1 30AC"),
    ('\u{334C}', "<square> 30E1 30AC 30C8 30F3"),
    ('\u{334D}', "<square> 30E1 30FC 30C8 30EB"),
    ('\u{334E}', "<square> 30E4 30FC 30C9"),
    ('\u{334F}', "<square> 30E4 30FC 30EB"),
    ('\u{3350}', "<square> 30E6 30A2 30F3"),
    ('\u{3351}', "<square> 30EA 30C3 30C8 30EB"),
    ('\u{3352}', "<square> 30EA 30E9"),
    ('\u{3353}', "<square> 30EB 30D4 30FC"),
    ('\u{3354}', "<square> 30EB 30FC 30D6 30EB"),
    ('\u{3355}', "<square> 30EC 30E0"),
    ('\u{3356}', "<square> 30EC 30F3 30C8 30B2 30F3"),
    ('\u{3357}', "<square> 30EF 30C3 30C8"),
    ('\u{3358}', "<compat> 0030 70B9"),
    ('\u{3359}', "<compat> 0031 70B9"),
    ('\u{335A}', "<compat> 0032 70B9"),
    ('\u{335B}', "<compat> 0033 70B9"),
    ('\u{335C}', "<compat> 0034 70B9"),
    ('\u{335D}', "<compat> 0035 70B9"),
    ('\u{335E}', "<compat> 0036 70B9"),
    ('\u{335F}', "<compat> 0037 70B9"),
    ('\u{3360}', "<compat> 0038 70B9"),
    ('\u{3361}', "<compat> 0039 70B9"),
    ('\u{3362}', "<compat> 0031 0030 70B9"),
    ('\u{3363}', "<compat> 0031 0031 70B9"),
    ('\u{3364}', "<compat> 0031 0032 70B9"),
    ('\u{3365}', "<compat> 0031 0033 70B9"),
    ('\u{3366}', "<compat> 0031 0034 70B9"),
    ('\u{3367}', "<compat> 0031 0035 70B9"),
    ('\u{3368}', "<compat> 0031 0036 70B9"),
    ('\u{3369}', "<compat> 0031 0037 70B9"),
    ('\u{336A}', "<compat> 0031 0038 70B9"),
    ('\u{336B}', "<compat> 0031 0039 70B9"),
    ('\u{336C}', "<compat> 0032 0030 70B9"),
    ('\u{336D}', "<compat> 0032 0031 70B9"),
    ('\u{336E}', "<compat> 0032 0032 70B9"),
    ('\u{336F}', "<compat> 0032 0033 70B9"),
    ('\u{3370}', "<compat> 0032 0034 70B9"),
    ('\u{3371}', "<square> 0068 0050 0061"),
    ('\u{3372}', "<square> 0064 0061"),
    ('\u{3373}', "<square> 0041 0055"),
    ('\u{3374}', "<square> 0062 0061 0072"),
    ('\u{3375}', "<square> 006F 0056"),
    ('\u{3376}', "<square> 0070 0063"),
    ('\u{3377}', "<square> 0064 006D"),
    ('\u{3378}', "<square> 0064 006D 00B2"),
    ('\u{3379}', "<square> 0064 006D 00B3"),
    ('\u{337A}', "<square> 0049 0055"),
    ('\u{337B}', "<square> 5E73 6210"),
    ('\u{337C}', "<square> 662D 548C"),
    ('\u{337D}', "<square> 5927 6B63"),
    ('\u{337E}', "<square> 660E 6CBB"),
    ('\u{337F}', "<square> 682A 5F0F 4F1A 793E"),
    ('\u{3380}', "<square> 0070 0041"),
    ('\u{3381}', "<square> 006E 0041"),
    ('\u{3382}', "<square> 03BC 0041"),
    ('\u{3383}', "<square> 006D 0041"),
    ('\u{3384}', "<square> 006B 0041"),
    ('\u{3385}', "<square> 004B 0042"),
    ('\u{3386}', "<square> 004D 0042"),
    ('\u{3387}', "<square> 0047 0042"),
    ('\u{3388}', "<square> 0063 0061 006C"),
    ('\u{3389}', "<square> 006B 0063 0061 006C"),
    ('\u{338A}', "<square> 0070 0046"),
    ('\u{338B}', "<square> 006E 0046"),
    ('\u{338C}', "<square> 03BC 0046"),
    ('\u{338D}', "<square> 03BC 0067"),
    ('\u{338E}', "<square> 006D 0067"),
    ('\u{338F}', "<square> 006B 0067"),
    ('\u{3390}', "<square> 0048 007A"),
    ('\u{3391}', "<square> 006B 0048 007A"),
    ('\u{3392}', "<square> 004D 0048 007A"),
    ('\u{3393}', "<square> 0047 0048 007A"),
    ('\u{3394}', "<square> 0054 0048 007A"),
    ('\u{3395}', "<square> 03BC 2113"),
    ('\u{3396}', "<square> 006D 2113"),
    ('\u{3397}', "<square> 0064 2113"),
    ('\u{3398}', "<square> 006B 2113"),
    ('\u{3399}', "<square> 0066 006D"),
    ('\u{339A}', "<square> 006E 006D"),
    ('\u{339B}', "<square> 03BC 006D"),
    ('\u{339C}', "<square> 006D 006D"),
    ('\u{339D}', "<square> 0063 006D"),
    ('\u{339E}', "<square> 006B 006D"),
    ('\u{339F}', "<square> 006D 006D 00B2"),
    ('\u{33A0}', "<square> 0063 006D 00B2"),
    ('\u{33A1}', "<square> 006D 00B2"),
    ('\u{33A2}', "<square> 006B 006D 00B2"),
    ('\u{33A3}', "<square> 006D 006D 00B3"),
    ('\u{33A4}', "<square> 0063 006D 00B3"),
    ('\u{33A5}', "<square> 006D 00B3"),
    ('\u{33A6}', "<square> 006B 006D 00B3"),
    ('\u{33A7}', "<square> 006D 2215 0073"),
    ('\u{33A8}', "<square> 006D 2215 0073 00B2"),
    ('\u{33A9}', "<square> 0050 0061"),
    ('\u{33AA}', "<square> 006B 0050 0061"),
    ('\u{33AB}', "<square> 004D 0050 0061"),
    ('\u{33AC}', "<square> 0047 0050 0061"),
    ('\u{33AD}', "<square> 0072 0061 0064"),
    ('\u{33AE}', "<square> 0072 0061 0064 2215 0073"),
    ('\u{33AF}', "<square> 0072 0061 0064 2215 0073 00B2"),
    ('\u{33B0}', "<square> 0070 0073"),
    ('\u{33B1}', "<square> 006E 0073"),
    ('\u{33B2}', "<square> 03BC 0073"),
    ('\u{33B3}', "<square> 006D 0073"),
    ('\u{33B4}', "<square> 0070 0056"),
    ('\u{33B5}', "<square> 006E 0056"),
    ('\u{33B6}', "<square> 03BC 0056"),
    ('\u{33B7}', "<square> 006D 0056"),
    ('\u{33B8}', "<square> 006B 0056"),
    ('\u{33B9}', "<square> 004D 0056"),
    ('\u{33BA}', "<square> 0070 0057"),
    ('\u{33BB}', "<square> 006E 0057"),
    ('\u{33BC}', "<square> 03BC 0057"),
    ('\u{33BD}', "<square> 006D 0057"),
    ('\u{33BE}', "<square> 006B 0057"),
    ('\u{33BF}', "<square> 004D 0057"),
    ('\u{33C0}', "<square> 006B 03A9"),
    ('\u{33C1}', "<square> 004D 03A9"),
    ('\u{33C2}', "<square> 0061 002E 006D 002E"),
    ('\u{33C3}', "<square> 0042 0071"),
    ('\u{33C4}', "<square> 0063 0063"),
    ('\u{33C5}', "<square> 0063 0064"),
    ('\u{33C6}', "<square> 0043 2215 006B 0067"),
    ('\u{33C7}', "<square> 0043 006F 002E"),
    ('\u{33C8}', "<square> 0064 0042"),
    ('\u{33C9}', "<square> 0047 0079"),
    ('\u{33CA}', "<square> 0068 0061"),
    ('\u{33CB}', "<square> 0048 0050"),
    ('\u{33CC}', "<square> 0069 006E"),
    ('\u{33CD}', "<square> 004B 004B"),
    ('\u{33CE}', "<square> 004B 004D"),
    ('\u{33CF}', "<square> 006B 0074"),
    ('\u{33D0}', "<square> 006C 006D"),
    ('\u{33D1}', "<square> 006C 006E"),
    ('\u{33D2}', "<square> 006C 006F 0067"),
    ('\u{33D3}', "<square> 006C 0078"),
    ('\u{33D4}', "<square> 006D 0062"),
    ('\u{33D5}', "<square> 006D 0069 006C"),
    ('\u{33D6}', "<square> 006D 006F 006C"),
    ('\u{33D7}', "<square> 0050 0048"),
    ('\u{33D8}', "<square> 0070 002E 006D 002E"),
    ('\u{33D9}', "<square> 0050 0050 004D"),
    ('\u{33DA}', "<square> 0050 0052"),
    ('\u{33DB}', "<square> 0073 0072"),
    ('\u{33DC}', "<square> 0053 0076"),
    ('\u{33DD}', "<square> 0057 0062"),
    ('\u{33DE}', "<square> 0056 2215 006D"),
    ('\u{33DF}', "<square> 0041 2215 006D"),
    ('\u{33E0}', "<compat> 0031 65E5"),
    ('\u{33E1}', "<compat> 0032 65E5"),
    ('\u{33E2}', "<compat> 0033 65E5"),
    ('\u{33E3}', "<compat> 0034 65E5"),
    ('\u{33E4}', "<compat> 0035 65E5"),
    ('\u{33E5}', "<compat> 0036 65E5"),
    ('\u{33E6}', "<compat> 0037 65E5"),
    ('\u{33E7}', "<compat> 0038 65E5"),
    ('\u{33E8}', "<compat> 0039 65E5"),
    ('\u{33E9}', "<compat> 0031 0030 65E5"),
    ('\u{33EA}', "<compat> 0031 0031 65E5"),
    ('\u{33EB}', "<compat> 0031 0032 65E5"),
    ('\u{33EC}', "<compat> 0031 0033 65E5"),
    ('\u{33ED}', "<compat> 0031 0034 65E5"),
    ('\u{33EE}', "<compat> 0031 0035 65E5"),
    ('\u{33EF}', "<compat> 0031 0036 65E5"),
    ('\u{33F0}', "<compat> 0031 0037 65E5"),
    ('\u{33F1}', "<compat> 0031 0038 65E5"),
    ('\u{33F2}', "<compat> 0031 0039 65E5"),
    ('\u{33F3}', "<compat> 0032 0030 65E5"),
    ('\u{33F4}', "<compat> 0032 0031 65E5"),
    ('\u{33F5}', "<compat> 0032 0032 65E5"),
    ('\u{33F6}', "<compat> 0032 0033 65E5"),
    ('\u{33F7}', "<compat> 0032 0034 65E5"),
    ('\u{33F8}', "<compat> 0032 0035 65E5"),
    ('\u{33F9}', "<compat> 0032 0036 65E5"),
    ('\u{33FA}', "<compat> 0032 0037 65E5"),
    ('\u{33FB}', "<compat> 0032 0038 65E5"),
    ('\u{33FC}', "<compat> 0032 0039 65E5"),
    ('\u{33FD}', "<compat> 0033 0030 65E5"),
    ('\u{33FE}', "<compat> 0033 0031 65E5"),
    ('\u{33FF}', "<square> 0067 0061 006C"),
    ('\u{A69C}', "<super> 044A"),
    ('\u{A69D}', "<super> 044C"),
    ('\u{A770}', "<super> A76F"),
    ('\u{A7F2}', "<super> 0043"),
    ('\u{A7F3}', "<super> 0046"),
    ('\u{A7F4}', "<super> 0051"),
    ('\u{A7F8}', "<super> 0126"),
    ('\u{A7F9}', "<super> 0153"),
    ('\u{AB5C}', "<super> A727"),
    ('\u{AB5D}', "<super> AB37"),
    ('\u{AB5E}', "<super> 026B"),
    ('\u{AB5F}', "<super> AB52"),
    ('\u{AB69}', "<super> 028D"),
    ('\u{F900}', "8C48"),
    ('\u{F901}', "66F4"),
    ('\u{F902}', "8ECA"),
    ('\u{F903}', "8CC8"),
    ('\u{F904}', "6ED1"),
    ('\u{F905}', "4E32"),
    ('\u{F906}', "53E5"),
    ('\u{F907}', "9F9C"),
    ('\u{F908}', "9F9C"),
    ('\u{F909}', "5951"),
    ('\u{F90A}', "91D1"),
    ('\u{F90B}', "5587"),
    ('\u{F90C}', "5948"),
    ('\u{F90D}', "61F6"),
    ('\u{F90E}', "7669"),
    ('\u{F90F}', "7F85"),
    ('\u{F910}', "863F"),
    ('\u{F911}', "87BA"),
    ('\u{F912}', "88F8"),
    ('\u{F913}', "908F"),
    ('\u{F914}', "6A02"),
    ('\u{F915}', "6D1B"),
    ('\u{F916}', "70D9"),
    ('\u{F917}', "73DE"),
    ('\u{F918}', "843D"),
    ('\u{F919}', "916A"),
    ('\u{F91A}', "99F1"),
    ('\u{F91B}', "4E82"),
    ('\u{F91C}', "5375"),
    ('\u{F91D}', "6B04"),
    ('\u{F91E}', "721B"),
    ('\u{F91F}', "862D"),
    ('\u{F920}', "9E1E"),
    ('\u{F921}', "5D50"),
    ('\u{F922}', "6FEB"),
    ('\u{F923}', "85CD"),
    ('\u{F924}', "8964"),
    ('\u{F925}', "62C9"),
    ('\u{F926}', "81D8"),
    ('\u{F927}', "881F"),
    ('\u{F928}', "5ECA"),
    ('\u{F929}', "6717"),
    ('\u{F92A}', "6D6A"),
    ('\u{F92B}', "72FC"),
    ('\u{F92C}', "90CE"),
    ('\u{F92D}', "4F86"),
    ('\u{F92E}', "51B7"),
    ('\u{F92F}', "52DE"),
    ('\u{F930}', "64C4"),
    ('\u{F931}', "6AD3"),
    ('\u{F932}', "7210"),
    ('\u{F933}', "76E7"),
    ('\u{F934}', "8001"),
    ('\u{F935}', "8606"),
    ('\u{F936}', "865C"),
    ('\u{F937}', "8DEF"),
    ('\u{F938}', "9732"),
    ('\u{F939}', "9B6F"),
    ('\u{F93A}', "9DFA"),
    ('\u{F93B}', "788C"),
    ('\u{F93C}', "797F"),
    ('\u{F93D}', "7DA0"),
    ('\u{F93E}', "83C9"),
    ('\u{F93F}', "9304"),
    ('\u{F940}', "9E7F"),
    ('\u{F941}', "8AD6"),
    ('\u{F942}', "58DF"),
    ('\u{F943}', "5F04"),
    ('\u{F944}', "7C60"),
    ('\u{F945}', "807E"),
    ('\u{F946}', "7262"),
    ('\u{F947}', "78CA"),
    ('\u{F948}', "8CC2"),
    ('\u{F949}', "96F7"),
    ('\u{F94A}', "58D8"),
    ('\u{F94B}', "5C62"),
    ('\u{F94C}', "6A13"),
    ('\u{F94D}', "6DDA"),
    ('\u{F94E}', "6F0F"),
    ('\u{F94F}', "7D2F"),
    ('\u{F950}', "7E37"),
    ('\u{F951}', "964B"),
    ('\u{F952}', "52D2"),
    ('\u{F953}', "808B"),
    ('\u{F954}', "51DC"),
    ('\u{F955}', "51CC"),
    ('\u{F956}', "7A1C"),
    ('\u{F957}', "7DBE"),
    ('\u{F958}', "83F1"),
    ('\u{F959}', "9675"),
    ('\u{F95A}', "8B80"),
    ('\u{F95B}', "62CF"),
    ('\u{F95C}', "6A02"),
    ('\u{F95D}', "8AFE"),
    ('\u{F95E}', "4E39"),
    ('\u{F95F}', "5BE7"),
    ('\u{F960}', "6012"),
    ('\u{F961}', "7387"),
    ('\u{F962}', "7570"),
    ('\u{F963}', "5317"),
    ('\u{F964}', "78FB"),
    ('\u{F965}', "4FBF"),
    ('\u{F966}', "5FA9"),
    ('\u{F967}', "4E0D"),
    ('\u{F968}', "6CCC"),
    ('\u{F969}', "6578"),
    ('\u{F96A}', "7D22"),
    ('\u{F96B}', "53C3"),
    ('\u{F96C}', "585E"),
    ('\u{F96D}', "7701"),
    ('\u{F96E}', "8449"),
    ('\u{F96F}', "8AAA"),
    ('\u{F970}', "6BBA"),
    ('\u{F971}', "8FB0"),
    ('\u{F972}', "6C88"),
    ('\u{F973}', "62FE"),
    ('\u{F974}', "82E5"),
    ('\u{F975}', "63A0"),
    ('\u{F976}', "7565"),
    ('\u{F977}', "4EAE"),
    ('\u{F978}', "5169"),
    ('\u{F979}', "51C9"),
    ('\u{F97A}', "6881"),
    ('\u{F97B}', "7CE7"),
    ('\u{F97C}', "826F"),
    ('\u{F97D}', "8AD2"),
    ('\u{F97E}', "91CF"),
    ('\u{F97F}', "52F5"),
    ('\u{F980}', "5442"),
    ('\u{F981}', "5973"),
    ('\u{F982}', "5EEC"),
    ('\u{F983}', "65C5"),
    ('\u{F984}', "6FFE"),
    ('\u{F985}', "792A"),
    ('\u{F986}', "95AD"),
    ('\u{F987}', "9A6A"),
    ('\u{F988}', "9E97"),
    ('\u{F989}', "9ECE"),
    ('\u{F98A}', "529B"),
    ('\u{F98B}', "66C6"),
    ('\u{F98C}', "6B77"),
    ('\u{F98D}', "8F62"),
    ('\u{F98E}', "5E74"),
    ('\u{F98F}', "6190"),
    ('\u{F990}', "6200"),
    ('\u{F991}', "649A"),
    ('\u{F992}', "6F23"),
    ('\u{F993}', "7149"),
    ('\u{F994}', "7489"),
    ('\u{F995}', "79CA"),
    ('\u{F996}', "7DF4"),
    ('\u{F997}', "806F"),
    ('\u{F998}', "8F26"),
    ('\u{F999}', "84EE"),
    ('\u{F99A}', "9023"),
    ('\u{F99B}', "934A"),
    ('\u{F99C}', "5217"),
    ('\u{F99D}', "52A3"),
    ('\u{F99E}', "54BD"),
    ('\u{F99F}', "70C8"),
    ('\u{F9A0}', "88C2"),
    ('\u{F9A1}', "8AAA"),
    ('\u{F9A2}', "5EC9"),
    ('\u{F9A3}', "5FF5"),
    ('\u{F9A4}', "637B"),
    ('\u{F9A5}', "6BAE"),
    ('\u{F9A6}', "7C3E"),
    ('\u{F9A7}', "7375"),
    ('\u{F9A8}', "4EE4"),
    ('\u{F9A9}', "56F9"),
    ('\u{F9AA}', "5BE7"),
    ('\u{F9AB}', "5DBA"),
    ('\u{F9AC}', "601C"),
    ('\u{F9AD}', "73B2"),
    ('\u{F9AE}', "7469"),
    ('\u{F9AF}', "7F9A"),
    ('\u{F9B0}', "8046"),
    ('\u{F9B1}', "9234"),
    ('\u{F9B2}', "96F6"),
    ('\u{F9B3}', "9748"),
    ('\u{F9B4}', "9818"),
    ('\u{F9B5}', "4F8B"),
    ('\u{F9B6}', "79AE"),
    ('\u{F9B7}', "91B4"),
    ('\u{F9B8}', "96B8"),
    ('\u{F9B9}', "60E1"),
    ('\u{F9BA}', "4E86"),
    ('\u{F9BB}', "50DA"),
    ('\u{F9BC}', "5BEE"),
    ('\u{F9BD}', "5C3F"),
    ('\u{F9BE}', "6599"),
    ('\u{F9BF}', "6A02"),
    ('\u{F9C0}', "71CE"),
    ('\u{F9C1}', "7642"),
    ('\u{F9C2}', "84FC"),
    ('\u{F9C3}', "907C"),
    ('\u{F9C4}', "9F8D"),
    ('\u{F9C5}', "6688"),
    ('\u{F9C6}', "962E"),
    ('\u{F9C7}', "5289"),
    ('\u{F9C8}', "677B"),
    ('\u{F9C9}', "67F3"),
    ('\u{F9CA}', "6D41"),
    ('\u{F9CB}', "6E9C"),
    ('\u{F9CC}', "7409"),
    ('\u{F9CD}', "7559"),
    ('\u{F9CE}', "786B"),
    ('\u{F9CF}', "7D10"),
    ('\u{F9D0}', "985E"),
    ('\u{F9D1}', "516D"),
    ('\u{F9D2}', "622E"),
    ('\u{F9D3}', "9678"),
    ('\u{F9D4}', "502B"),
    ('\u{F9D5}', "5D19"),
    ('\u{F9D6}', "6DEA"),
    ('\u{F9D7}', "8F2A"),
    ('\u{F9D8}', "5F8B"),
    ('\u{F9D9}', "6144"),
    ('\u{F9DA}', "6817"),
    ('\u{F9DB}', "7387"),
    ('\u{F9DC}', "9686"),
    ('\u{F9DD}', "5229"),
    ('\u{F9DE}', "540F"),
    ('\u{F9DF}', "5C65"),
    ('\u{F9E0}', "6613"),
    ('\u{F9E1}', "674E"),
    ('\u{F9E2}', "68A8"),
    ('\u{F9E3}', "6CE5"),
    ('\u{F9E4}', "7406"),
    ('\u{F9E5}', "75E2"),
    ('\u{F9E6}', "7F79"),
    ('\u{F9E7}', "88CF"),
    ('\u{F9E8}', "88E1"),
    ('\u{F9E9}', "91CC"),
    ('\u{F9EA}', "96E2"),
    ('\u{F9EB}', "533F"),
    ('\u{F9EC}', "6EBA"),
    ('\u{F9ED}', "541D"),
    ('\u{F9EE}', "71D0"),
    ('\u{F9EF}', "7498"),
    ('\u{F9F0}', "85FA"),
    ('\u{F9F1}', "96A3"),
    ('\u{F9F2}', "9C57"),
    ('\u{F9F3}', "9E9F"),
    ('\u{F9F4}', "6797"),
    ('\u{F9F5}', "6DCB"),
    ('\u{F9F6}', "81E8"),
    ('\u{F9F7}', "7ACB"),
    ('\u{F9F8}', "7B20"),
    ('\u{F9F9}', "7C92"),
    ('\u{F9FA}', "72C0"),
    ('\u{F9FB}', "7099"),
    ('\u{F9FC}', "8B58"),
    ('\u{F9FD}', "4EC0"),
    ('\u{F9FE}', "8336"),
    ('\u{F9FF}', "523A"),
    ('\u{FA00}', "5207"),
    ('\u{FA01}', "5EA6"),
    ('\u{FA02}', "62D3"),
    ('\u{FA03}', "7CD6"),
    ('\u{FA04}', "5B85"),
    ('\u{FA05}', "6D1E"),
    ('\u{FA06}', "66B4"),
    ('\u{FA07}', "8F3B"),
    ('\u{FA08}', "884C"),
    ('\u{FA09}', "964D"),
    ('\u{FA0A}', "898B"),
    ('\u{FA0B}', "5ED3"),
    ('\u{FA0C}', "5140"),
    ('\u{FA0D}', "55C0"),
    ('\u{FA10}', "585A"),
    ('\u{FA12}', "6674"),
    ('\u{FA15}', "51DE"),
    ('\u{FA16}', "732A"),
    ('\u{FA17}', "76CA"),
    ('\u{FA18}', "793C"),
    ('\u{FA19}', "795E"),
    ('\u{FA1A}', "7965"),
    ('\u{FA1B}', "798F"),
    ('\u{FA1C}', "9756"),
    ('\u{FA1D}', "7CBE"),
    ('\u{FA1E}', "7FBD"),
    ('\u{FA20}', "8612"),
    ('\u{FA22}', "8AF8"),
    ('\u{FA25}', "9038"),
    ('\u{FA26}', "90FD"),
    ('\u{FA2A}', "98EF"),
    ('\u{FA2B}', "98FC"),
    ('\u{FA2C}', "9928"),
    ('\u{FA2D}', "9DB4"),
    ('\u{FA2E}', "90DE"),
    ('\u{FA2F}', "96B7"),
    ('\u{FA30}', "4FAE"),
    ('\u{FA31}', "50E7"),
    ('\u{FA32}', "514D"),
    ('\u{FA33}', "52C9"),
    ('\u{FA34}', "52E4"),
    ('\u{FA35}', "5351"),
    ('\u{FA36}', "559D"),
    ('\u{FA37}', "5606"),
    ('\u{FA38}', "5668"),
    ('\u{FA39}', "5840"),
    ('\u{FA3A}', "58A8"),
    ('\u{FA3B}', "5C64"),
    ('\u{FA3C}', "5C6E"),
    ('\u{FA3D}', "6094"),
    ('\u{FA3E}', "6168"),
    ('\u{FA3F}', "618E"),
    ('\u{FA40}', "61F2"),
    ('\u{FA41}', "654F"),
    ('\u{FA42}', "65E2"),
    ('\u{FA43}', "6691"),
    ('\u{FA44}', "6885"),
    ('\u{FA45}', "6D77"),
    ('\u{FA46}', "6E1A"),
    ('\u{FA47}', "6F22"),
    ('\u{FA48}', "716E"),
    ('\u{FA49}', "722B"),
    ('\u{FA4A}', "7422"),
    ('\u{FA4B}', "7891"),
    ('\u{FA4C}', "793E"),
    ('\u{FA4D}', "7949"),
    ('\u{FA4E}', "7948"),
    ('\u{FA4F}', "7950"),
    ('\u{FA50}', "7956"),
    ('\u{FA51}', "795D"),
    ('\u{FA52}', "798D"),
    ('\u{FA53}', "798E"),
    ('\u{FA54}', "7A40"),
    ('\u{FA55}', "7A81"),
    ('\u{FA56}', "7BC0"),
    ('\u{FA57}', "7DF4"),
    ('\u{FA58}', "7E09"),
    ('\u{FA59}', "7E41"),
    ('\u{FA5A}', "7F72"),
    ('\u{FA5B}', "8005"),
    ('\u{FA5C}', "81ED"),
    ('\u{FA5D}', "8279"),
    ('\u{FA5E}', "8279"),
    ('\u{FA5F}', "8457"),
    ('\u{FA60}', "8910"),
    ('\u{FA61}', "8996"),
    ('\u{FA62}', "8B01"),
    ('\u{FA63}', "8B39"),
    ('\u{FA64}', "8CD3"),
    ('\u{FA65}', "8D08"),
    ('\u{FA66}', "8FB6"),
    ('\u{FA67}', "9038"),
    ('\u{FA68}', "96E3"),
    ('\u{FA69}', "97FF"),
    ('\u{FA6A}', "983B"),
    ('\u{FA6B}', "6075"),
    ('\u{FA6C}', "242EE"),
    ('\u{FA6D}', "8218"),
    ('\u{FA70}', "4E26"),
    ('\u{FA71}', "51B5"),
    ('\u{FA72}', "5168"),
    ('\u{FA73}', "4F80"),
    ('\u{FA74}', "5145"),
    ('\u{FA75}', "5180"),
    ('\u{FA76}', "52C7"),
    ('\u{FA77}', "52FA"),
    ('\u{FA78}', "559D"),
    ('\u{FA79}', "5555"),
    ('\u{FA7A}', "5599"),
    ('\u{FA7B}', "55E2"),
    ('\u{FA7C}', "585A"),
    ('\u{FA7D}', "58B3"),
    ('\u{FA7E}', "5944"),
    ('\u{FA7F}', "5954"),
    ('\u{FA80}', "5A62"),
    ('\u{FA81}', "5B28"),
    ('\u{FA82}', "5ED2"),
    ('\u{FA83}', "5ED9"),
    ('\u{FA84}', "5F69"),
    ('\u{FA85}', "5FAD"),
    ('\u{FA86}', "60D8"),
    ('\u{FA87}', "614E"),
    ('\u{FA88}', "6108"),
    ('\u{FA89}', "618E"),
    ('\u{FA8A}', "6160"),
    ('\u{FA8B}', "61F2"),
    ('\u{FA8C}', "6234"),
    ('\u{FA8D}', "63C4"),
    ('\u{FA8E}', "641C"),
    ('\u{FA8F}', "6452"),
    ('\u{FA90}', "6556"),
    ('\u{FA91}', "6674"),
    ('\u{FA92}', "6717"),
    ('\u{FA93}', "671B"),
    ('\u{FA94}', "6756"),
    ('\u{FA95}', "6B79"),
    ('\u{FA96}', "6BBA"),
    ('\u{FA97}', "6D41"),
    ('\u{FA98}', "6EDB"),
    ('\u{FA99}', "6ECB"),
    ('\u{FA9A}', "6F22"),
    ('\u{FA9B}', "701E"),
    ('\u{FA9C}', "716E"),
    ('\u{FA9D}', "77A7"),
    ('\u{FA9E}', "7235"),
    ('\u{FA9F}', "72AF"),
    ('\u{FAA0}', "732A"),
    ('\u{FAA1}', "7471"),
    ('\u{FAA2}', "7506"),
    ('\u{FAA3}', "753B"),
    ('\u{FAA4}', "761D"),
    ('\u{FAA5}', "761F"),
    ('\u{FAA6}', "76CA"),
    ('\u{FAA7}', "76DB"),
    ('\u{FAA8}', "76F4"),
    ('\u{FAA9}', "774A"),
    ('\u{FAAA}', "7740"),
    ('\u{FAAB}', "78CC"),
    ('\u{FAAC}', "7AB1"),
    ('\u{FAAD}', "7BC0"),
    ('\u{FAAE}', "7C7B"),
    ('\u{FAAF}', "7D5B"),
    ('\u{FAB0}', "7DF4"),
    ('\u{FAB1}', "7F3E"),
    ('\u{FAB2}', "8005"),
    ('\u{FAB3}', "8352"),
    ('\u{FAB4}', "83EF"),
    ('\u{FAB5}', "8779"),
    ('\u{FAB6}', "8941"),
    ('\u{FAB7}', "8986"),
    ('\u{FAB8}', "8996"),
    ('\u{FAB9}', "8ABF"),
    ('\u{FABA}', "8AF8"),
    ('\u{FABB}', "8ACB"),
    ('\u{FABC}', "8B01"),
    ('\u{FABD}', "8AFE"),
    ('\u{FABE}', "8AED"),
    ('\u{FABF}', "8B39"),
    ('\u{FAC0}', "8B8A"),
    ('\u{FAC1}', "8D08"),
    ('\u{FAC2}', "8F38"),
    ('\u{FAC3}', "9072"),
    ('\u{FAC4}', "9199"),
    ('\u{FAC5}', "9276"),
    ('\u{FAC6}', "967C"),
    ('\u{FAC7}', "96E3"),
    ('\u{FAC8}', "9756"),
    ('\u{FAC9}', "97DB"),
    ('\u{FACA}', "97FF"),
    ('\u{FACB}', "980B"),
    ('\u{FACC}', "983B"),
    ('\u{FACD}', "9B12"),
    ('\u{FACE}', "9F9C"),
    ('\u{FACF}', "2284A"),
    ('\u{FAD0}', "22844"),
    ('\u{FAD1}', "233D5"),
    ('\u{FAD2}', "3B9D"),
    ('\u{FAD3}', "4018"),
    ('\u{FAD4}', "4039"),
    ('\u{FAD5}', "25249"),
    ('\u{FAD6}', "25CD0"),
    ('\u{FAD7}', "27ED3"),
    ('\u{FAD8}', "9F43"),
    ('\u{FAD9}', "9F8E"),
    ('\u{FB00}', "<compat> 0066 0066"),
    ('\u{FB01}', "<compat> 0066 0069"),
    ('\u{FB02}', "<compat> 0066 006C"),
    ('\u{FB03}', "<compat> 0066 0066 0069"),
    ('\u{FB04}', "<compat> 0066 0066 006C"),
    ('\u{FB05}', "<compat> 017F 0074"),
    ('\u{FB06}', "<compat> 0073 0074"),
    ('\u{FB13}', "<compat> 0574 0576"),
    ('\u{FB14}', "<compat> 0574 0565"),
    ('\u{FB15}', "<compat> 0574 056B"),
    ('\u{FB16}', "<compat> 057E 0576"),
    ('\u{FB17}', "<compat> 0574 056D"),
    ('\u{FB1D}', "05D9 05B4"),
    ('\u{FB1F}', "05F2 05B7"),
    ('\u{FB20}', "<font> 05E2"),
    ('\u{FB21}', "<font> 05D0"),
    ('\u{FB22}', "<font> 05D3"),
    ('\u{FB23}', "<font> 05D4"),
    ('\u{FB24}', "<font> 05DB"),
    ('\u{FB25}', "<font> 05DC"),
    ('\u{FB26}', "<font> 05DD"),
    ('\u{FB27}', "<font> 05E8"),
    ('\u{FB28}', "<font> 05EA"),
    ('\u{FB29}', "<font> 002B"),
    ('\u{FB2A}', "05E9 05C1"),
    ('\u{FB2B}', "05E9 05C2"),
    ('\u{FB2C}', "FB49 05C1"),
    ('\u{FB2D}', "FB49 05C2"),
    ('\u{FB2E}', "05D0 05B7"),
    ('\u{FB2F}', "05D0 05B8"),
    ('\u{FB30}', "05D0 05BC"),
    ('\u{FB31}', "05D1 05BC"),
    ('\u{FB32}', "05D2 05BC"),
    ('\u{FB33}', "05D3 05BC"),
    ('\u{FB34}', "05D4 05BC"),
    ('\u{FB35}', "05D5 05BC"),
    ('\u{FB36}', "05D6 05BC"),
    ('\u{FB38}', "05D8 05BC"),
    ('\u{FB39}', "05D9 05BC"),
    ('\u{FB3A}', "05DA 05BC"),
    ('\u{FB3B}', "05DB 05BC"),
    ('\u{FB3C}', "05DC 05BC"),
    ('\u{FB3E}', "05DE 05BC"),
    ('\u{FB40}', "05E0 05BC"),
    ('\u{FB41}', "05E1 05BC"),
    ('\u{FB43}', "05E3 05BC"),
    ('\u{FB44}', "05E4 05BC"),
    ('\u{FB46}', "05E6 05BC"),
    ('\u{FB47}', "05E7 05BC"),
    ('\u{FB48}', "05E8 05BC"),
    ('\u{FB49}', "05E9 05BC"),
    ('\u{FB4A}', "05EA 05BC"),
    ('\u{FB4B}', "05D5 05B9"),
    ('\u{FB4C}', "05D1 05BF"),
    ('\u{FB4D}', "05DB 05BF"),
    ('\u{FB4E}', "05E4 05BF"),
    ('\u{FB4F}', "<compat> 05D0 05DC"),
    ('\u{FB50}', "<isolated> 0671"),
    ('\u{FB51}', "<final> 0671"),
    ('\u{FB52}', "<isolated> 067B"),
    ('\u{FB53}', "<final> 067B"),
    ('\u{FB54}', "<initial> 067B"),
    ('\u{FB55}', "<medial> 067B"),
    ('\u{FB56}', "<isolated> 067E"),
    ('\u{FB57}', "<final> 067E"),
    ('\u{FB58}', "<initial> 067E"),
    ('\u{FB59}', "<medial> 067E"),
    ('\u{FB5A}', "<isolated> 0680"),
    ('\u{FB5B}', "<final> 0680"),
    ('\u{FB5C}', "<initial> 0680"),
    ('\u{FB5D}', "<medial> 0680"),
    ('\u{FB5E}', "<isolated> 067A"),
    ('\u{FB5F}', "<final> 067A"),
    ('\u{FB60}', "<initial> 067A"),
    ('\u{FB61}', "<medial> 067A"),
    ('\u{FB62}', "<isolated> 067F"),
    ('\u{FB63}', "<final> 067F"),
    ('\u{FB64}', "<initial> 067F"),
    ('\u{FB65}', "<medial> 067F"),
    ('\u{FB66}', "<isolated> 0679"),
    ('\u{FB67}', "<final> 0679"),
    ('\u{FB68}', "<initial> 0679"),
    ('\u{FB69}', "<medial> 0679"),
    ('\u{FB6A}', "<isolated> 06A4"),
    ('\u{FB6B}', "<final> 06A4"),
    ('\u{FB6C}', "<initial> 06A4"),
    ('\u{FB6D}', "<medial> 06A4"),
    ('\u{FB6E}', "<isolated> 06A6"),
    ('\u{FB6F}', "<final> 06A6"),
    ('\u{FB70}', "<initial> 06A6"),
    ('\u{FB71}', "<medial> 06A6"),
    ('\u{FB72}', "<isolated> 0684"),
    ('\u{FB73}', "<final> 0684"),
    ('\u{FB74}', "<initial> 0684"),
    ('\u{FB75}', "<medial> 0684"),
    ('\u{FB76}', "<isolated> 0683"),
    ('\u{FB77}', "<final> 0683"),
    ('\u{FB78}', "<initial> 0683"),
    ('\u{FB79}', "<medial> 0683"),
    ('\u{FB7A}', "<isolated> 0686"),
    ('\u{FB7B}', "<final> 0686"),
    ('\u{FB7C}', "<initial> 0686"),
    ('\u{FB7D}', "<medial> 0686"),
    ('\u{FB7E}', "<isolated> 0687"),
    ('\u{FB7F}', "<final> 0687"),
    ('\u{FB80}', "<initial> 0687"),
    ('\u{FB81}', "<medial> 0687"),
    ('\u{FB82}', "<isolated> 068D"),
    ('\u{FB83}', "<final> 068D"),
    ('\u{FB84}', "<isolated> 068C"),
    ('\u{FB85}', "<final> 068C"),
    ('\u{FB86}', "<isolated> 068E"),
    ('\u{FB87}', "<final> 068E"),
    ('\u{FB88}', "<isolated> 0688"),
    ('\u{FB89}', "<final> 0688"),
    ('\u{FB8A}', "<isolated> 0698"),
    ('\u{FB8B}', "<final> 0698"),
    ('\u{FB8C}', "<isolated> 0691"),
    ('\u{FB8D}', "<final> 0691"),
    ('\u{FB8E}', "<isolated> 06A9"),
    ('\u{FB8F}', "<final> 06A9"),
    ('\u{FB90}', "<initial> 06A9"),
    ('\u{FB91}', "<medial> 06A9"),
    ('\u{FB92}', "<isolated> 06AF"),
    ('\u{FB93}', "<final> 06AF"),
    ('\u{FB94}', "<initial> 06AF"),
    ('\u{FB95}', "<medial> 06AF"),
    ('\u{FB96}', "<isolated> 06B3"),
    ('\u{FB97}', "<final> 06B3"),
    ('\u{FB98}', "<initial> 06B3"),
    ('\u{FB99}', "<medial> 06B3"),
    ('\u{FB9A}', "<isolated> 06B1"),
    ('\u{FB9B}', "<final> 06B1"),
    ('\u{FB9C}', "<initial> 06B1"),
    ('\u{FB9D}', "<medial> 06B1"),
    ('\u{FB9E}', "<isolated> 06BA"),
    ('\u{FB9F}', "<final> 06BA"),
    ('\u{FBA0}', "<isolated> 06BB"),
    ('\u{FBA1}', "<final> 06BB"),
    ('\u{FBA2}', "<initial> 06BB"),
    ('\u{FBA3}', "<medial> 06BB"),
    ('\u{FBA4}', "<isolated> 06C0"),
    ('\u{FBA5}', "<final> 06C0"),
    ('\u{FBA6}', "<isolated> 06C1"),
    ('\u{FBA7}', "<final> 06C1"),
    ('\u{FBA8}', "<initial> 06C1"),
    ('\u{FBA9}', "<medial> 06C1"),
    ('\u{FBAA}', "<isolated> 06BE"),
    ('\u{FBAB}', "<final> 06BE"),
    ('\u{FBAC}', "<initial> 06BE"),
    ('\u{FBAD}', "<medial> 06BE"),
    ('\u{FBAE}', "<isolated> 06D2"),
    ('\u{FBAF}', "<final> 06D2"),
    ('\u{FBB0}', "<isolated> 06D3"),
    ('\u{FBB1}', "<final> 06D3"),
    ('\u{FBD3}', "<isolated> 06AD"),
    ('\u{FBD4}', "<final> 06AD"),
    ('\u{FBD5}', "<initial> 06AD"),
    ('\u{FBD6}', "<medial> 06AD"),
    ('\u{FBD7}', "<isolated> 06C7"),
    ('\u{FBD8}', "<final> 06C7"),
    ('\u{FBD9}', "<isolated> 06C6"),
    ('\u{FBDA}', "<final> 06C6"),
    ('\u{FBDB}', "<isolated> 06C8"),
    ('\u{FBDC}', "<final> 06C8"),
    ('\u{FBDD}', "<isolated> 0677"),
    ('\u{FBDE}', "<isolated> 06CB"),
    ('\u{FBDF}', "<final> 06CB"),
    ('\u{FBE0}', "<isolated> 06C5"),
    ('\u{FBE1}', "<final> 06C5"),
    ('\u{FBE2}', "<isolated> 06C9"),
    ('\u{FBE3}', "<final> 06C9"),
    ('\u{FBE4}', "<isolated> 06D0"),
    ('\u{FBE5}', "<final> 06D0"),
    ('\u{FBE6}', "<initial> 06D0"),
    ('\u{FBE7}', "<medial> 06D0"),
    ('\u{FBE8}', "<initial> 0649"),
    ('\u{FBE9}', "<medial> 0649"),
    ('\u{FBEA}', "<isolated> 0626 0627"),
    ('\u{FBEB}', "<final> 0626 0627"),
    ('\u{FBEC}', "<isolated> 0626 06D5"),
    ('\u{FBED}', "<final> 0626 06D5"),
    ('\u{FBEE}', "<isolated> 0626 0648"),
    ('\u{FBEF}', "<final> 0626 0648"),
    ('\u{FBF0}', "<isolated> 0626 06C7"),
    ('\u{FBF1}', "<final> 0626 06C7"),
    ('\u{FBF2}', "<isolated> 0626 06C6"),
    ('\u{FBF3}', "<final> 0626 06C6"),
    ('\u{FBF4}', "<isolated> 0626 06C8"),
    ('\u{FBF5}', "<final> 0626 06C8"),
    ('\u{FBF6}', "<isolated> 0626 06D0"),
    ('\u{FBF7}', "<final> 0626 06D0"),
    ('\u{FBF8}', "<initial> 0626 06D0"),
    ('\u{FBF9}', "<isolated> 0626 0649"),
    ('\u{FBFA}', "<final> 0626 0649"),
    ('\u{FBFB}', "<initial> 0626 0649"),
    ('\u{FBFC}', "<isolated> 06CC"),
    ('\u{FBFD}', "<final> 06CC"),
    ('\u{FBFE}', "<initial> 06CC"),
    ('\u{FBFF}', "<medial> 06CC"),
    ('\u{FC00}', "<isolated> 0626 062C"),
    ('\u{FC01}', "<isolated> 0626 062D"),
    ('\u{FC02}', "<isolated> 0626 0645"),
    ('\u{FC03}', "<isolated> 0626 0649"),
    ('\u{FC04}', "<isolated> 0626 064A"),
    ('\u{FC05}', "<isolated> 0628 062C"),
    ('\u{FC06}', "<isolated> 0628 062D"),
    ('\u{FC07}', "<isolated> 0628 062E"),
    ('\u{FC08}', "<isolated> 0628 0645"),
    ('\u{FC09}', "<isolated> 0628 0649"),
    ('\u{FC0A}', "<isolated> 0628 064A"),
    ('\u{FC0B}', "<isolated> 062A 062C"),
    ('\u{FC0C}', "<isolated> 062A 062D"),
    ('\u{FC0D}', "<isolated> 062A 062E"),
    ('\u{FC0E}', "<isolated> 062A 0645"),
    ('\u{FC0F}', "<isolated> 062A 0649"),
    ('\u{FC10}', "<isolated> 062A 064A"),
    ('\u{FC11}', "<isolated> 062B 062C"),
    ('\u{FC12}', "<isolated> 062B 0645"),
    ('\u{FC13}', "<isolated> 062B 0649"),
    ('\u{FC14}', "<isolated> 062B 064A"),
    ('\u{FC15}', "<isolated> 062C 062D"),
    ('\u{FC16}', "<isolated> 062C 0645"),
    ('\u{FC17}', "<isolated> 062D 062C"),
    ('\u{FC18}', "<isolated> 062D 0645"),
    ('\u{FC19}', "<isolated> 062E 062C"),
    ('\u{FC1A}', "<isolated> 062E 062D"),
    ('\u{FC1B}', "<isolated> 062E 0645"),
    ('\u{FC1C}', "<isolated> 0633 062C"),
    ('\u{FC1D}', "<isolated> 0633 062D"),
    ('\u{FC1E}', "<isolated> 0633 062E"),
    ('\u{FC1F}', "<isolated> 0633 0645"),
    ('\u{FC20}', "<isolated> 0635 062D"),
    ('\u{FC21}', "<isolated> 0635 0645"),
    ('\u{FC22}', "<isolated> 0636 062C"),
    ('\u{FC23}', "<isolated> 0636 062D"),
    ('\u{FC24}', "<isolated> 0636 062E"),
    ('\u{FC25}', "<isolated> 0636 0645"),
    ('\u{FC26}', "<isolated> 0637 062D"),
    ('\u{FC27}', "<isolated> 0637 0645"),
    ('\u{FC28}', "<isolated> 0638 0645"),
    ('\u{FC29}', "<isolated> 0639 062C"),
    ('\u{FC2A}', "<isolated> 0639 0645"),
    ('\u{FC2B}', "<isolated> 063A 062C"),
    ('\u{FC2C}', "<isolated> 063A 0645"),
    ('\u{FC2D}', "<isolated> 0641 062C"),
    ('\u{FC2E}', "<isolated> 0641 062D"),
    ('\u{FC2F}', "<isolated> 0641 062E"),
    ('\u{FC30}', "<isolated> 0641 0645"),
    ('\u{FC31}', "<isolated> 0641 0649"),
    ('\u{FC32}', "<isolated> 0641 064A"),
    ('\u{FC33}', "<isolated> 0642 062D"),
    ('\u{FC34}', "<isolated> 0642 0645"),
    ('\u{FC35}', "<isolated> 0642 0649"),
    ('\u{FC36}', "<isolated> 0642 064A"),
    ('\u{FC37}', "<isolated> 0643 0627"),
    ('\u{FC38}', "<isolated> 0643 062C"),
    ('\u{FC39}', "<isolated> 0643 062D"),
    ('\u{FC3A}', "<isolated> 0643 062E"),
    ('\u{FC3B}', "<isolated> 0643 0644"),
    ('\u{FC3C}', "<isolated> 0643 0645"),
    ('\u{FC3D}', "<isolated> 0643 0649"),
    ('\u{FC3E}', "<isolated> 0643 064A"),
    ('\u{FC3F}', "<isolated> 0644 062C"),
    ('\u{FC40}', "<isolated> 0644 062D"),
    ('\u{FC41}', "<isolated> 0644 062E"),
    ('\u{FC42}', "<isolated> 0644 0645"),
    ('\u{FC43}', "<isolated> 0644 0649"),
    ('\u{FC44}', "<isolated> 0644 064A"),
    ('\u{FC45}', "<isolated> 0645 062C"),
    ('\u{FC46}', "<isolated> 0645 062D"),
    ('\u{FC47}', "<isolated> 0645 062E"),
    ('\u{FC48}', "<isolated> 0645 0645"),
    ('\u{FC49}', "<isolated> 0645 0649"),
    ('\u{FC4A}', "<isolated> 0645 064A"),
    ('\u{FC4B}', "<isolated> 0646 062C"),
    ('\u{FC4C}', "<isolated> 0646 062D"),
    ('\u{FC4D}', "<isolated> 0646 062E"),
    ('\u{FC4E}', "<isolated> 0646 0645"),
    ('\u{FC4F}', "<isolated> 0646 0649"),
    ('\u{FC50}', "<isolated> 0646 064A"),
    ('\u{FC51}', "<isolated> 0647 062C"),
    ('\u{FC52}', "<isolated> 0647 0645"),
    ('\u{FC53}', "<isolated> 0647 0649"),
    ('\u{FC54}', "<isolated> 0647 064A"),
    ('\u{FC55}', "<isolated> 064A 062C"),
    ('\u{FC56}', "<isolated> 064A 062D"),
    ('\u{FC57}', "<isolated> 064A 062E"),
    ('\u{FC58}', "<isolated> 064A 0645"),
    ('\u{FC59}', "<isolated> 064A 0649"),
    ('\u{FC5A}', "<isolated> 064A 064A"),
    ('\u{FC5B}', "<isolated> 0630 0670"),
    ('\u{FC5C}', "<isolated> 0631 0670"),
    ('\u{FC5D}', "<isolated> 0649 0670"),
    ('\u{FC5E}', "<isolated> 0020 064C 0651"),
    ('\u{FC5F}', "<isolated> 0020 064D 0651"),
    ('\u{FC60}', "<isolated> 0020 064E 0651"),
    ('\u{FC61}', "<isolated> 0020 064F 0651"),
    ('\u{FC62}', "<isolated> 0020 0650 0651"),
    ('\u{FC63}', "<isolated> 0020 0651 0670"),
    ('\u{FC64}', "<final> 0626 0631"),
    ('\u{FC65}', "<final> 0626 0632"),
    ('\u{FC66}', "<final> 0626 0645"),
    ('\u{FC67}', "<final> 0626 0646"),
    ('\u{FC68}', "<final> 0626 0649"),
    ('\u{FC69}', "<final> 0626 064A"),
    ('\u{FC6A}', "<final> 0628 0631"),
    ('\u{FC6B}', "<final> 0628 0632"),
    ('\u{FC6C}', "<final> 0628 0645"),
    ('\u{FC6D}', "<final> 0628 0646"),
    ('\u{FC6E}', "<final> 0628 0649"),
    ('\u{FC6F}', "<final> 0628 064A"),
    ('\u{FC70}', "<final> 062A 0631"),
    ('\u{FC71}', "<final> 062A 0632"),
    ('\u{FC72}', "<final> 062A 0645"),
    ('\u{FC73}', "<final> 062A 0646"),
    ('\u{FC74}', "<final> 062A 0649"),
    ('\u{FC75}', "<final> 062A 064A"),
    ('\u{FC76}', "<final> 062B 0631"),
    ('\u{FC77}', "<final> 062B 0632"),
    ('\u{FC78}', "<final> 062B 0645"),
    ('\u{FC79}', "<final> 062B 0646"),
    ('\u{FC7A}', "<final> 062B 0649"),
    ('\u{FC7B}', "<final> 062B 064A"),
    ('\u{FC7C}', "<final> 0641 0649"),
    ('\u{FC7D}', "<final> 0641 064A"),
    ('\u{FC7E}', "<final> 0642 0649"),
    ('\u{FC7F}', "<final> 0642 064A"),
    ('\u{FC80}', "<final> 0643 0627"),
    ('\u{FC81}', "<final> 0643 0644"),
    ('\u{FC82}', "<final> 0643 0645"),
    ('\u{FC83}', "<final> 0643 0649"),
    ('\u{FC84}', "<final> 0643 064A"),
    ('\u{FC85}', "<final> 0644 0645"),
    ('\u{FC86}', "<final> 0644 0649"),
    ('\u{FC87}', "<final> 0644 064A"),
    ('\u{FC88}', "<final> 0645 0627"),
    ('\u{FC89}', "<final> 0645 0645"),
    ('\u{FC8A}', "<final> 0646 0631"),
    ('\u{FC8B}', "<final> 0646 0632"),
    ('\u{FC8C}', "<final> 0646 0645"),
    ('\u{FC8D}', "<final> 0646 0646"),
    ('\u{FC8E}', "<final> 0646 0649"),
    ('\u{FC8F}', "<final> 0646 064A"),
    ('\u{FC90}', "<final> 0649 0670"),
    ('\u{FC91}', "<final> 064A 0631"),
    ('\u{FC92}', "<final> 064A 0632"),
    ('\u{FC93}', "<final> 064A 0645"),
    ('\u{FC94}', "<final> 064A 0646"),
    ('\u{FC95}', "<final> 064A 0649"),
    ('\u{FC96}', "<final> 064A 064A"),
    ('\u{FC97}', "<initial> 0626 062C"),
    ('\u{FC98}', "<initial> 0626 062D"),
    ('\u{FC99}', "<initial> 0626 062E"),
    ('\u{FC9A}', "<initial> 0626 0645"),
    ('\u{FC9B}', "<initial> 0626 0647"),
    ('\u{FC9C}', "<initial> 0628 062C"),
    ('\u{FC9D}', "<initial> 0628 062D"),
    ('\u{FC9E}', "<initial> 0628 062E"),
    ('\u{FC9F}', "<initial> 0628 0645"),
    ('\u{FCA0}', "<initial> 0628 0647"),
    ('\u{FCA1}', "<initial> 062A 062C"),
    ('\u{FCA2}', "<initial> 062A 062D"),
    ('\u{FCA3}', "<initial> 062A 062E"),
    ('\u{FCA4}', "<initial> 062A 0645"),
    ('\u{FCA5}', "<initial> 062A 0647"),
    ('\u{FCA6}', "<initial> 062B 0645"),
    ('\u{FCA7}', "<initial> 062C 062D"),
    ('\u{FCA8}', "<initial> 062C 0645"),
    ('\u{FCA9}', "<initial> 062D 062C"),
    ('\u{FCAA}', "<initial> 062D 0645"),
    ('\u{FCAB}', "<initial> 062E 062C"),
    ('\u{FCAC}', "<initial> 062E 0645"),
    ('\u{FCAD}', "<initial> 0633 062C"),
    ('\u{FCAE}', "<initial> 0633 062D"),
    ('\u{FCAF}', "<initial> 0633 062E"),
    ('\u{FCB0}', "<initial> 0633 0645"),
    ('\u{FCB1}', "<initial> 0635 062D"),
    ('\u{FCB2}', "<initial> 0635 062E"),
    ('\u{FCB3}', "<initial> 0635 0645"),
    ('\u{FCB4}', "<initial> 0636 062C"),
    ('\u{FCB5}', "<initial> 0636 062D"),
    ('\u{FCB6}', "<initial> 0636 062E"),
    ('\u{FCB7}', "<initial> 0636 0645"),
    ('\u{FCB8}', "<initial> 0637 062D"),
    ('\u{FCB9}', "<initial> 0638 0645"),
    ('\u{FCBA}', "<initial> 0639 062C"),
    ('\u{FCBB}', "<initial> 0639 0645"),
    ('\u{FCBC}', "<initial> 063A 062C"),
    ('\u{FCBD}', "<initial> 063A 0645"),
    ('\u{FCBE}', "<initial> 0641 062C"),
    ('\u{FCBF}', "<initial> 0641 062D"),
    ('\u{FCC0}', "<initial> 0641 062E"),
    ('\u{FCC1}', "<initial> 0641 0645"),
    ('\u{FCC2}', "<initial> 0642 062D"),
    ('\u{FCC3}', "<initial> 0642 0645"),
    ('\u{FCC4}', "<initial> 0643 062C"),
    ('\u{FCC5}', "<initial> 0643 062D"),
    ('\u{FCC6}', "<initial> 0643 062E"),
    ('\u{FCC7}', "<initial> 0643 0644"),
    ('\u{FCC8}', "<initial> 0643 0645"),
    ('\u{FCC9}', "<initial> 0644 062C"),
    ('\u{FCCA}', "<initial> 0644 062D"),
    ('\u{FCCB}', "<initial> 0644 062E"),
    ('\u{FCCC}', "<initial> 0644 0645"),
    ('\u{FCCD}', "<initial> 0644 0647"),
    ('\u{FCCE}', "<initial> 0645 062C"),
    ('\u{FCCF}', "<initial> 0645 062D"),
    ('\u{FCD0}', "<initial> 0645 062E"),
    ('\u{FCD1}', "<initial> 0645 0645"),
    ('\u{FCD2}', "<initial> 0646 062C"),
    ('\u{FCD3}', "<initial> 0646 062D"),
    ('\u{FCD4}', "<initial> 0646 062E"),
    ('\u{FCD5}', "<initial> 0646 0645"),
    ('\u{FCD6}', "<initial> 0646 0647"),
    ('\u{FCD7}', "<initial> 0647 062C"),
    ('\u{FCD8}', "<initial> 0647 0645"),
    ('\u{FCD9}', "<initial> 0647 0670"),
    ('\u{FCDA}', "<initial> 064A 062C"),
    ('\u{FCDB}', "<initial> 064A 062D"),
    ('\u{FCDC}', "<initial> 064A 062E"),
    ('\u{FCDD}', "<initial> 064A 0645"),
    ('\u{FCDE}', "<initial> 064A 0647"),
    ('\u{FCDF}', "<medial> 0626 0645"),
    ('\u{FCE0}', "<medial> 0626 0647"),
    ('\u{FCE1}', "<medial> 0628 0645"),
    ('\u{FCE2}', "<medial> 0628 0647"),
    ('\u{FCE3}', "<medial> 062A 0645"),
    ('\u{FCE4}', "<medial> 062A 0647"),
    ('\u{FCE5}', "<medial> 062B 0645"),
    ('\u{FCE6}', "<medial> 062B 0647"),
    ('\u{FCE7}', "<medial> 0633 0645"),
    ('\u{FCE8}', "<medial> 0633 0647"),
    ('\u{FCE9}', "<medial> 0634 0645"),
    ('\u{FCEA}', "<medial> 0634 0647"),
    ('\u{FCEB}', "<medial> 0643 0644"),
    ('\u{FCEC}', "<medial> 0643 0645"),
    ('\u{FCED}', "<medial> 0644 0645"),
    ('\u{FCEE}', "<medial> 0646 0645"),
    ('\u{FCEF}', "<medial> 0646 0647"),
    ('\u{FCF0}', "<medial> 064A 0645"),
    ('\u{FCF1}', "<medial> 064A 0647"),
    ('\u{FCF2}', "<medial> 0640 064E 0651"),
    ('\u{FCF3}', "<medial> 0640 064F 0651"),
    ('\u{FCF4}', "<medial> 0640 0650 0651"),
    ('\u{FCF5}', "<isolated> 0637 0649"),
    ('\u{FCF6}', "<isolated> 0637 064A"),
    ('\u{FCF7}', "<isolated> 0639 0649"),
    ('\u{FCF8}', "<isolated> 0639 064A"),
    ('\u{FCF9}', "<isolated> 063A 0649"),
    ('\u{FCFA}', "<isolated> 063A 064A"),
    ('\u{FCFB}', "<isolated> 0633 0649"),
    ('\u{FCFC}', "<isolated> 0633 064A"),
    ('\u{FCFD}', "<isolated> 0634 0649"),
    ('\u{FCFE}', "<isolated> 0634 064A"),
    ('\u{FCFF}', "<isolated> 062D 0649"),
    ('\u{FD00}', "<isolated> 062D 064A"),
    ('\u{FD01}', "<isolated> 062C 0649"),
    ('\u{FD02}', "<isolated> 062C 064A"),
    ('\u{FD03}', "<isolated> 062E 0649"),
    ('\u{FD04}', "<isolated> 062E 064A"),
    ('\u{FD05}', "<isolated> 0635 0649"),
    ('\u{FD06}', "<isolated> 0635 064A"),
    ('\u{FD07}', "<isolated> 0636 0649"),
    ('\u{FD08}', "<isolated> 0636 064A"),
    ('\u{FD09}', "<isolated> 0634 062C"),
    ('\u{FD0A}', "<isolated> 0634 062D"),
    ('\u{FD0B}', "<isolated> 0634 062E"),
    ('\u{FD0C}', "<isolated> 0634 0645"),
    ('\u{FD0D}', "<isolated> 0634 0631"),
    ('\u{FD0E}', "<isolated> 0633 0631"),
    ('\u{FD0F}', "<isolated> 0635 0631"),
    ('\u{FD10}', "<isolated> 0636 0631"),
    ('\u{FD11}', "<final> 0637 0649"),
    ('\u{FD12}', "<final> 0637 064A"),
    ('\u{FD13}', "<final> 0639 0649"),
    ('\u{FD14}', "<final> 0639 064A"),
    ('\u{FD15}', "<final> 063A 0649"),
    ('\u{FD16}', "<final> 063A 064A"),
    ('\u{FD17}', "<final> 0633 0649"),
    ('\u{FD18}', "<final> 0633 064A"),
    ('\u{FD19}', "<final> 0634 0649"),
    ('\u{FD1A}', "<final> 0634 064A"),
    ('\u{FD1B}', "<final> 062D 0649"),
    ('\u{FD1C}', "<final> 062D 064A"),
    ('\u{FD1D}', "<final> 062C 0649"),
    ('\u{FD1E}', "<final> 062C 064A"),
    ('\u{FD1F}', "<final> 062E 0649"),
    ('\u{FD20}', "<final> 062E 064A"),
    ('\u{FD21}', "<final> 0635 0649"),
    ('\u{FD22}', "<final> 0635 064A"),
    ('\u{FD23}', "<final> 0636 0649"),
    ('\u{FD24}', "<final> 0636 064A"),
    ('\u{FD25}', "<final> 0634 062C"),
    ('\u{FD26}', "<final> 0634 062D"),
    ('\u{FD27}', "<final> 0634 062E"),
    ('\u{FD28}', "<final> 0634 0645"),
    ('\u{FD29}', "<final> 0634 0631"),
    ('\u{FD2A}', "<final> 0633 0631"),
    ('\u{FD2B}', "<final> 0635 0631"),
    ('\u{FD2C}', "<final> 0636 0631"),
    ('\u{FD2D}', "<initial> 0634 062C"),
    ('\u{FD2E}', "<initial> 0634 062D"),
    ('\u{FD2F}', "<initial> 0634 062E"),
    ('\u{FD30}', "<initial> 0634 0645"),
    ('\u{FD31}', "<initial> 0633 0647"),
    ('\u{FD32}', "<initial> 0634 0647"),
    ('\u{FD33}', "<initial> 0637 0645"),
    ('\u{FD34}', "<medial> 0633 062C"),
    ('\u{FD35}', "<medial> 0633 062D"),
    ('\u{FD36}', "<medial> 0633 062E"),
    ('\u{FD37}', "<medial> 0634 062C"),
    ('\u{FD38}', "<medial> 0634 062D"),
    ('\u{FD39}', "<medial> 0634 062E"),
    ('\u{FD3A}', "<medial> 0637 0645"),
    ('\u{FD3B}', "<medial> 0638 0645"),
    ('\u{FD3C}', "<final> 0627 064B"),
    ('\u{FD3D}', "<isolated> 0627 064B"),
    ('\u{FD50}', "<initial> 062A 062C 0645"),
    ('\u{FD51}', "<final> 062A 062D 062C"),
    ('\u{FD52}', "<initial> 062A 062D 062C"),
    ('\u{FD53}', "<initial> 062A 062D 0645"),
    ('\u{FD54}', "<initial> 062A 062E 0645"),
    ('\u{FD55}', "<initial> 062A 0645 062C"),
    ('\u{FD56}', "<initial> 062A 0645 062D"),
    ('\u{FD57}', "<initial> 062A 0645 062E"),
    ('\u{FD58}', "<final> 062C 0645 062D"),
    ('\u{FD59}', "<initial> 062C 0645 062D"),
    ('\u{FD5A}', "<final> 062D 0645 064A"),
    ('\u{FD5B}', "<final> 062D 0645 0649"),
    ('\u{FD5C}', "<initial> 0633 062D 062C"),
    ('\u{FD5D}', "<initial> 0633 062C 062D"),
    ('\u{FD5E}', "<final> 0633 062C 0649"),
    ('\u{FD5F}', "<final> 0633 0645 062D"),
    ('\u{FD60}', "<initial> 0633 0645 062D"),
    ('\u{FD61}', "<initial> 0633 0645 062C"),
    ('\u{FD62}', "<final> 0633 0645 0645"),
    ('\u{FD63}', "<initial> 0633 0645 0645"),
    ('\u{FD64}', "<final> 0635 062D 062D"),
    ('\u{FD65}', "<initial> 0635 062D 062D"),
    ('\u{FD66}', "<final> 0635 0645 0645"),
    ('\u{FD67}', "<final> 0634 062D 0645"),
    ('\u{FD68}', "<initial> 0634 062D 0645"),
    ('\u{FD69}', "<final> 0634 062C 064A"),
    ('\u{FD6A}', "<final> 0634 0645 062E"),
    ('\u{FD6B}', "<initial> 0634 0645 062E"),
    ('\u{FD6C}', "<final> 0634 0645 0645"),
    ('\u{FD6D}', "<initial> 0634 0645 0645"),
    ('\u{FD6E}', "<final> 0636 062D 0649"),
    ('\u{FD6F}', "<final> 0636 062E 0645"),
    ('\u{FD70}', "<initial> 0636 062E 0645"),
    ('\u{FD71}', "<final> 0637 0645 062D"),
    ('\u{FD72}', "<initial> 0637 0645 062D"),
    ('\u{FD73}', "<initial> 0637 0645 0645"),
    ('\u{FD74}', "<final> 0637 0645 064A"),
    ('\u{FD75}', "<final> 0639 062C 0645"),
    ('\u{FD76}', "<final> 0639 0645 0645"),
    ('\u{FD77}', "<initial> 0639 0645 0645"),
    ('\u{FD78}', "<final> 0639 0645 0649"),
    ('\u{FD79}', "<final> 063A 0645 0645"),
    ('\u{FD7A}', "<final> 063A 0645 064A"),
    ('\u{FD7B}', "<final> 063A 0645 0649"),
    ('\u{FD7C}', "<final> 0641 062E 0645"),
    ('\u{FD7D}', "<initial> 0641 062E 0645"),
    ('\u{FD7E}', "<final> 0642 0645 062D"),
    ('\u{FD7F}', "<final> 0642 0645 0645"),
    ('\u{FD80}', "<final> 0644 062D 0645"),
    ('\u{FD81}', "<final> 0644 062D 064A"),
    ('\u{FD82}', "<final> 0644 062D 0649"),
    ('\u{FD83}', "<initial> 0644 062C 062C"),
    ('\u{FD84}', "<final> 0644 062C 062C"),
    ('\u{FD85}', "<final> 0644 062E 0645"),
    ('\u{FD86}', "<initial> 0644 062E 0645"),
    ('\u{FD87}', "<final> 0644 0645 062D"),
    ('\u{FD88}', "<initial> 0644 0645 062D"),
    ('\u{FD89}', "<initial> 0645 062D 062C"),
    ('\u{FD8A}', "<initial> 0645 062D 0645"),
    ('\u{FD8B}', "<final> 0645 062D 064A"),
    ('\u{FD8C}', "<initial> 0645 062C 062D"),
    ('\u{FD8D}', "<initial> 0645 062C 0645"),
    ('\u{FD8E}', "<initial> 0645 062E 062C"),
    ('\u{FD8F}', "<initial> 0645 062E 0645"),
    ('\u{FD92}', "<initial> 0645 062C 062E"),
    ('\u{FD93}', "<initial> 0647 0645 062C"),
    ('\u{FD94}', "<initial> 0647 0645 0645"),
    ('\u{FD95}', "<initial> 0646 062D 0645"),
    ('\u{FD96}', "<final> 0646 062D 0649"),
    ('\u{FD97}', "<final> 0646 062C 0645"),
    ('\u{FD98}', "<initial> 0646 062C 0645"),
    ('\u{FD99}', "<final> 0646 062C 0649"),
    ('\u{FD9A}', "<final> 0646 0645 064A"),
    ('\u{FD9B}', "<final> 0646 0645 0649"),
    ('\u{FD9C}', "<final> 064A 0645 0645"),
    ('\u{FD9D}', "<initial> 064A 0645 0645"),
    ('\u{FD9E}', "<final> 0628 062E 064A"),
    ('\u{FD9F}', "<final> 062A 062C 064A"),
    ('\u{FDA0}', "<final> 062A 062C 0649"),
    ('\u{FDA1}', "<final> 062A 062E 064A"),
    ('\u{FDA2}', "<final> 062A 062E 0649"),
    ('\u{FDA3}', "<final> 062A 0645 064A"),
    ('\u{FDA4}', "<final> 062A 0645 0649"),
    ('\u{FDA5}', "<final> 062C 0645 064A"),
    ('\u{FDA6}', "<final> 062C 062D 0649"),
    ('\u{FDA7}', "<final> 062C 0645 0649"),
    ('\u{FDA8}', "<final> 0633 062E 0649"),
    ('\u{FDA9}', "<final> 0635 062D 064A"),
    ('\u{FDAA}', "<final> 0634 062D 064A"),
    ('\u{FDAB}', "<final> 0636 062D 064A"),
    ('\u{FDAC}', "<final> 0644 062C 064A"),
    ('\u{FDAD}', "<final> 0644 0645 064A"),
    ('\u{FDAE}', "<final> 064A 062D 064A"),
    ('\u{FDAF}', "<final> 064A 062C 064A"),
    ('\u{FDB0}', "<final> 064A 0645 064A"),
    ('\u{FDB1}', "<final> 0645 0645 064A"),
    ('\u{FDB2}', "<final> 0642 0645 064A"),
    ('\u{FDB3}', "<final> 0646 062D 064A"),
    ('\u{FDB4}', "<initial> 0642 0645 062D"),
    ('\u{FDB5}', "<initial> 0644 062D 0645"),
    ('\u{FDB6}', "<final> 0639 0645 064A"),
    ('\u{FDB7}', "<final> 0643 0645 064A"),
    ('\u{FDB8}', "<initial> 0646 062C 062D"),
    ('\u{FDB9}', "<final> 0645 062E 064A"),
    ('\u{FDBA}', "<initial> 0644 062C 0645"),
    ('\u{FDBB}', "<final> 0643 0645 0645"),
    ('\u{FDBC}', "<final> 0644 062C 0645"),
    ('\u{FDBD}', "<final> 0646 062C 062D"),
    ('\u{FDBE}', "<final> 062C 062D 064A"),
    ('\u{FDBF}', "<final> 062D 062C 064A"),
    ('\u{FDC0}', "<final> 0645 062C 064A"),
    ('\u{FDC1}', "<final> 0641 0645 064A"),
    ('\u{FDC2}', "<final> 0628 062D 064A"),
    ('\u{FDC3}', "<initial> 0643 0645 0645"),
    ('\u{FDC4}', "<initial> 0639 062C 0645"),
    ('\u{FDC5}', "<initial> 0635 0645 0645"),
    ('\u{FDC6}', "<final> 0633 062E 064A"),
    ('\u{FDC7}', "<final> 0646 062C 064A"),
    ('\u{FDF0}', "<isolated> 0635 0644 06D2"),
    ('\u{FDF1}', "<isolated> 0642 0644 06D2"),
    ('\u{FDF2}', "<isolated> 0627 0644 0644 0647"),
    ('\u{FDF3}', "<isolated> 0627 0643 0628 0631"),
    ('\u{FDF4}', "<isolated> 0645 062D 0645 062F"),
    ('\u{FDF5}', "<isolated> 0635 0644 0639 0645"),
    ('\u{FDF6}', "<isolated> 0631 0633 0648 0644"),
    ('\u{FDF7}', "<isolated> 0639 0644 064A 0647"),
    ('\u{FDF8}', "<isolated> 0648 0633 0644 0645"),
    ('\u{FDF9}', "<isolated> 0635 0644 0649"),
    ('\u{FDFA}', "<isolated> 0635 0644 0649 0020 0627 0644 0644 0647 0020 0639 0644 064A 0647 0020 0648 0633 0644 0645"),
    ('\u{FDFB}', "<isolated> 062C 0644 0020 062C 0644 0627 0644 0647"),
    ('\u{FDFC}', "<isolated> 0631 06CC 0627 0644"),
    ('\u{FE10}', "<vertical> 002C"),
    ('\u{FE11}', "<vertical> 3001"),
    ('\u{FE12}', "<vertical> 3002"),
    ('\u{FE13}', "<vertical> 003A"),
    ('\u{FE14}', "<vertical> 003B"),
    ('\u{FE15}', "<vertical> 0021"),
    ('\u{FE16}', "<vertical> 003F"),
    ('\u{FE17}', "<vertical> 3016"),
    ('\u{FE18}', "<vertical> 3017"),
    ('\u{FE19}', "<vertical> 2026"),
    ('\u{FE30}', "<vertical> 2025"),
    ('\u{FE31}', "<vertical> 2014"),
    ('\u{FE32}', "<vertical> 2013"),
    ('\u{FE33}', "<vertical> 005F"),
    ('\u{FE34}', "<vertical> 005F"),
    ('\u{FE35}', "<vertical> 0028"),
    ('\u{FE36}', "<vertical> 0029"),
    ('\u{FE37}', "<vertical> 007B"),
    ('\u{FE38}', "<vertical> 007D"),
    ('\u{FE39}', "<vertical> 3014"),
    ('\u{FE3A}', "<vertical> 3015"),
    ('\u{FE3B}', "<vertical> 3010"),
    ('\u{FE3C}', "<vertical> 3011"),
    ('\u{FE3D}', "<vertical> 300A"),
    ('\u{FE3E}', "<vertical> 300B"),
    ('\u{FE3F}', "<vertical> 3008"),
    ('\u{FE40}', "<vertical> 3009"),
    ('\u{FE41}', "<vertical> 300C"),
    ('\u{FE42}', "<vertical> 300D"),
    ('\u{FE43}', "<vertical> 300E"),
    ('\u{FE44}', "<vertical> 300F"),
    ('\u{FE47}', "<vertical> 005B"),
    ('\u{FE48}', "<vertical> 005D"),
    ('\u{FE49}', "<compat> 203E"),
    ('\u{FE4A}', "<compat> 203E"),
    ('\u{FE4B}', "<compat> 203E"),
    ('\u{FE4C}', "<compat> 203E"),
    ('\u{FE4D}', "<compat> 005F"),
    ('\u{FE4E}', "<compat> 005F"),
    ('\u{FE4F}', "<compat> 005F"),
    ('\u{FE50}', "<small> 002C"),
    ('\u{FE51}', "<small> 3001"),
    ('\u{FE52}', "<small> 002E"),
    ('\u{FE54}', "<small> 003B"),
    ('\u{FE55}', "<small> 003A"),
    ('\u{FE56}', "<small> 003F"),
    ('\u{FE57}', "<small> 0021"),
    ('\u{FE58}', "<small> 2014"),
    ('\u{FE59}', "<small> 0028"),
    ('\u{FE5A}', "<small> 0029"),
    ('\u{FE5B}', "<small> 007B"),
    ('\u{FE5C}', "<small> 007D"),
    ('\u{FE5D}', "<small> 3014"),
    ('\u{FE5E}', "<small> 3015"),
    ('\u{FE5F}', "<small> 0023"),
    ('\u{FE60}', "<small> 0026"),
    ('\u{FE61}', "<small> 002A"),
    ('\u{FE62}', "<small> 002B"),
    ('\u{FE63}', "<small> 002D"),
    ('\u{FE64}', "<small> 003C"),
    ('\u{FE65}', "<small> 003E"),
    ('\u{FE66}', "<small> 003D"),
    ('\u{FE68}', "<small> 005C"),
    ('\u{FE69}', "<small> 0024"),
    ('\u{FE6A}', "<small> 0025"),
    ('\u{FE6B}', "<small> 0040"),
    ('\u{FE70}', "<isolated> 0020 064B"),
    ('\u{FE71}', "<medial> 0640 064B"),
    ('\u{FE72}', "<isolated> 0020 064C"),
    ('\u{FE74}', "<isolated> 0020 064D"),
    ('\u{FE76}', "<isolated> 0020 064E"),
    ('\u{FE77}', "<medial> 0640 064E"),
    ('\u{FE78}', "<isolated> 0020 064F"),
    ('\u{FE79}', "<medial> 0640 064F"),
    ('\u{FE7A}', "<isolated> 0020 0650"),
    ('\u{FE7B}', "<medial> 0640 0650"),
    ('\u{FE7C}', "<isolated> 0020 0651"),
    ('\u{FE7D}', "<medial> 0640 0651"),
    ('\u{FE7E}', "<isolated> 0020 0652"),
    ('\u{FE7F}', "<medial> 0640 0652"),
    ('\u{FE80}', "<isolated> 0621"),
    ('\u{FE81}', "<isolated> 0622"),
    ('\u{FE82}', "<final> 0622"),
    ('\u{FE83}', "<isolated> 0623"),
    ('\u{FE84}', "<final> 0623"),
    ('\u{FE85}', "<isolated> 0624"),
    ('\u{FE86}', "<final> 0624"),
    ('\u{FE87}', "<isolated> 0625"),
    ('\u{FE88}', "<final> 0625"),
    ('\u{FE89}', "<isolated> 0626"),
    ('\u{FE8A}', "<final> 0626"),
    ('\u{FE8B}', "<initial> 0626"),
    ('\u{FE8C}', "<medial> 0626"),
    ('\u{FE8D}', "<isolated> 0627"),
    ('\u{FE8E}', "<final> 0627"),
    ('\u{FE8F}', "<isolated> 0628"),
    ('\u{FE90}', "<final> 0628"),
    ('\u{FE91}', "<initial> 0628"),
    ('\u{FE92}', "<medial> 0628"),
    ('\u{FE93}', "<isolated> 0629"),
    ('\u{FE94}', "<final> 0629"),
    ('\u{FE95}', "<isolated> 062A"),
    ('\u{FE96}', "<final> 062A"),
    ('\u{FE97}', "<initial> 062A"),
    ('\u{FE98}', "<medial> 062A"),
    ('\u{FE99}', "<isolated> 062B"),
    ('\u{FE9A}', "<final> 062B"),
    ('\u{FE9B}', "<initial> 062B"),
    ('\u{FE9C}', "<medial> 062B"),
    ('\u{FE9D}', "<isolated> 062C"),
    ('\u{FE9E}', "<final> 062C"),
    ('\u{FE9F}', "<initial> 062C"),
    ('\u{FEA0}', "<medial> 062C"),
    ('\u{FEA1}', "<isolated> 062D"),
    ('\u{FEA2}', "<final> 062D"),
    ('\u{FEA3}', "<initial> 062D"),
    ('\u{FEA4}', "<medial> 062D"),
    ('\u{FEA5}', "<isolated> 062E"),
    ('\u{FEA6}', "<final> 062E"),
    ('\u{FEA7}', "<initial> 062E"),
    ('\u{FEA8}', "<medial> 062E"),
    ('\u{FEA9}', "<isolated> 062F"),
    ('\u{FEAA}', "<final> 062F"),
    ('\u{FEAB}', "<isolated> 0630"),
    ('\u{FEAC}', "<final> 0630"),
    ('\u{FEAD}', "<isolated> 0631"),
    ('\u{FEAE}', "<final> 0631"),
    ('\u{FEAF}', "<isolated> 0632"),
    ('\u{FEB0}', "<final> 0632"),
    ('\u{FEB1}', "<isolated> 0633"),
    ('\u{FEB2}', "<final> 0633"),
    ('\u{FEB3}', "<initial> 0633"),
    ('\u{FEB4}', "<medial> 0633"),
    ('\u{FEB5}', "<isolated> 0634"),
    ('\u{FEB6}', "<final> 0634"),
    ('\u{FEB7}', "<initial> 0634"),
    ('\u{FEB8}', "<medial> 0634"),
    ('\u{FEB9}', "<isolated> 0635"),
    ('\u{FEBA}', "<final> 0635"),
    ('\u{FEBB}', "<initial> 0635"),
    ('\u{FEBC}', "<medial> 0635"),
    ('\u{FEBD}', "<isolated> 0636"),
    ('\u{FEBE}', "<final> 0636"),
    ('\u{FEBF}', "<initial> 0636"),
    ('\u{FEC0}', "<medial> 0636"),
    ('\u{FEC1}', "<isolated> 0637"),
    ('\u{FEC2}', "<final> 0637"),
    ('\u{FEC3}', "<initial> 0637"),
    ('\u{FEC4}', "<medial> 0637"),
    ('\u{FEC5}', "<isolated> 0638"),
    ('\u{FEC6}', "<final> 0638"),
    ('\u{FEC7}', "<initial> 0638"),
    ('\u{FEC8}', "<medial> 0638"),
    ('\u{FEC9}', "<isolated> 0639"),
    ('\u{FECA}', "<final> 0639"),
    ('\u{FECB}', "<initial> 0639"),
    ('\u{FECC}', "<medial> 0639"),
    ('\u{FECD}', "<isolated> 063A"),
    ('\u{FECE}', "<final> 063A"),
    ('\u{FECF}', "<initial> 063A"),
    ('\u{FED0}', "<medial> 063A"),
    ('\u{FED1}', "<isolated> 0641"),
    ('\u{FED2}', "<final> 0641"),
    ('\u{FED3}', "<initial> 0641"),
    ('\u{FED4}', "<medial> 0641"),
    ('\u{FED5}', "<isolated> 0642"),
    ('\u{FED6}', "<final> 0642"),
    ('\u{FED7}', "<initial> 0642"),
    ('\u{FED8}', "<medial> 0642"),
    ('\u{FED9}', "<isolated> 0643"),
    ('\u{FEDA}', "<final> 0643"),
    ('\u{FEDB}', "<initial> 0643"),
    ('\u{FEDC}', "<medial> 0643"),
    ('\u{FEDD}', "<isolated> 0644"),
    ('\u{FEDE}', "<final> 0644"),
    ('\u{FEDF}', "<initial> 0644"),
    ('\u{FEE0}', "<medial> 0644"),
    ('\u{FEE1}', "<isolated> 0645"),
    ('\u{FEE2}', "<final> 0645"),
    ('\u{FEE3}', "<initial> 0645"),
    ('\u{FEE4}', "<medial> 0645"),
    ('\u{FEE5}', "<isolated> 0646"),
    ('\u{FEE6}', "<final> 0646"),
    ('\u{FEE7}', "<initial> 0646"),
    ('\u{FEE8}', "<medial> 0646"),
    ('\u{FEE9}', "<isolated> 0647"),
    ('\u{FEEA}', "<final> 0647"),
    ('\u{FEEB}', "<initial> 0647"),
    ('\u{FEEC}', "<medial> 0647"),
    ('\u{FEED}', "<isolated> 0648"),
    ('\u{FEEE}', "<final> 0648"),
    ('\u{FEEF}', "<isolated> 0649"),
    ('\u{FEF0}', "<final> 0649"),
    ('\u{FEF1}', "<isolated> 064A"),
    ('\u{FEF2}', "<final> 064A"),
    ('\u{FEF3}', "<initial> 064A"),
    ('\u{FEF4}', "<medial> 064A"),
    ('\u{FEF5}', "<isolated> 0644 0622"),
    ('\u{FEF6}', "<final> 0644 0622"),
    ('\u{FEF7}', "<isolated> 0644 0623"),
    ('\u{FEF8}', "<final> 0644 0623"),
    ('\u{FEF9}', "<isolated> 0644 0625"),
    ('\u{FEFA}', "<final> 0644 0625"),
    ('\u{FEFB}', "<isolated> 0644 0627"),
    ('\u{FEFC}', "<final> 0644 0627"),
    ('\u{FF01}', "<wide> 0021"),
    ('\u{FF02}', "<wide> 0022"),
    ('\u{FF03}', "<wide> 0023"),
    ('\u{FF04}', "<wide> 0024"),
    ('\u{FF05}', "<wide> 0025"),
    ('\u{FF06}', "<wide> 0026"),
    ('\u{FF07}', "<wide> 0027"),
    ('\u{FF08}', "<wide> 0028"),
    ('\u{FF09}', "<wide> 0029"),
    ('\u{FF0A}', "<wide> 002A"),
    ('\u{FF0B}', "<wide> 002B"),
    ('\u{FF0C}', "<wide> 002C"),
    ('\u{FF0D}', "<wide> 002D"),
    ('\u{FF0E}', "<wide> 002E"),
    ('\u{FF0F}', "<wide> 002F"),
    ('\u{FF10}', "<wide> 0030"),
    ('\u{FF11}', "<wide> 0031"),
    ('\u{FF12}', "<wide> 0032"),
    ('\u{FF13}', "<wide> 0033"),
    ('\u{FF14}', "<wide> 0034"),
    ('\u{FF15}', "<wide> 0035"),
    ('\u{FF16}', "<wide> 0036"),
    ('\u{FF17}', "<wide> 0037"),
    ('\u{FF18}', "<wide> 0038"),
    ('\u{FF19}', "<wide> 0039"),
    ('\u{FF1A}', "<wide> 003A"),
    ('\u{FF1B}', "<wide> 003B"),
    ('\u{FF1C}', "<wide> 003C"),
    ('\u{FF1D}', "<wide> 003D"),
    ('\u{FF1E}', "<wide> 003E"),
    ('\u{FF1F}', "<wide> 003F"),
    ('\u{FF20}', "<wide> 0040"),
    ('\u{FF21}', "<wide> 0041"),
    ('\u{FF22}', "<wide> 0042"),
    ('\u{FF23}', "<wide> 0043"),
    ('\u{FF24}', "<wide> 0044"),
    ('\u{FF25}', "<wide> 0045"),
    ('\u{FF26}', "<wide> 0046"),
    ('\u{FF27}', "<wide> 0047"),
    ('\u{FF28}', "<wide> 0048"),
    ('\u{FF29}', "<wide> 0049"),
    ('\u{FF2A}', "<wide> 004A"),
    ('\u{FF2B}', "<wide> 004B"),
    ('\u{FF2C}', "<wide> 004C"),
    ('\u{FF2D}', "<wide> 004D"),
    ('\u{FF2E}', "<wide> 004E"),
    ('\u{FF2F}', "<wide> 004F"),
    ('\u{FF30}', "<wide> 0050"),
    ('\u{FF31}', "<wide> 0051"),
    ('\u{FF32}', "<wide> 0052"),
    ('\u{FF33}', "<wide> 0053"),
    ('\u{FF34}', "<wide> 0054"),
    ('\u{FF35}', "<wide> 0055"),
    ('\u{FF36}', "<wide> 0056"),
    ('\u{FF37}', "<wide> 0057"),
    ('\u{FF38}', "<wide> 0058"),
    ('\u{FF39}', "<wide> 0059"),
    ('\u{FF3A}', "<wide> 005A"),
    ('\u{FF3B}', "<wide> 005B"),
    ('\u{FF3C}', "<wide> 005C"),
    ('\u{FF3D}', "<wide> 005D"),
    ('\u{FF3E}', "<wide> 005E"),
    ('\u{FF3F}', "<wide> 005F"),
    ('\u{FF40}', "<wide> 0060"),
    ('\u{FF41}', "<wide> 0061"),
    ('\u{FF42}', "<wide> 0062"),
    ('\u{FF43}', "<wide> 0063"),
    ('\u{FF44}', "<wide> 0064"),
    ('\u{FF45}', "<wide> 0065"),
    ('\u{FF46}', "<wide> 0066"),
    ('\u{FF47}', "<wide> 0067"),
    ('\u{FF48}', "<wide> 0068"),
    ('\u{FF49}', "<wide> 0069"),
    ('\u{FF4A}', "<wide> 006A"),
    ('\u{FF4B}', "<wide> 006B"),
    ('\u{FF4C}', "<wide> 006C"),
    ('\u{FF4D}', "<wide> 006D"),
    ('\u{FF4E}', "<wide> 006E"),
    ('\u{FF4F}', "<wide> 006F"),
    ('\u{FF50}', "<wide> 0070"),
    ('\u{FF51}', "<wide> 0071"),
    ('\u{FF52}', "<wide> 0072"),
    ('\u{FF53}', "<wide> 0073"),
    ('\u{FF54}', "<wide> 0074"),
    ('\u{FF55}', "<wide> 0075"),
    ('\u{FF56}', "<wide> 0076"),
    ('\u{FF57}', "<wide> 0077"),
    ('\u{FF58}', "<wide> 0078"),
    ('\u{FF59}', "<wide> 0079"),
    ('\u{FF5A}', "<wide> 007A"),
    ('\u{FF5B}', "<wide> 007B"),
    ('\u{FF5C}', "<wide> 007C"),
    ('\u{FF5D}', "<wide> 007D"),
    ('\u{FF5E}', "<wide> 007E"),
    ('\u{FF5F}', "<wide> 2985"),
    ('\u{FF60}', "<wide> 2986"),
    ('\u{FF61}', "<narrow> 3002"),
    ('\u{FF62}', "<narrow> 300C"),
    ('\u{FF63}', "<narrow> 300D"),
    ('\u{FF64}', "<narrow> 3001"),
    ('\u{FF65}', "<narrow> 30FB"),
    ('\u{FF66}', "<narrow> 30F2"),
    ('\u{FF67}', "<narrow> 30A1"),
    ('\u{FF68}', "<narrow> 30A3"),
    ('\u{FF69}', "<narrow> 30A5"),
    ('\u{FF6A}', "<narrow> 30A7"),
    ('\u{FF6B}', "<narrow> 30A9"),
    ('\u{FF6C}', "<narrow> 30E3"),
    ('\u{FF6D}', "<narrow> 30E5"),
    ('\u{FF6E}', "<narrow> 30E7"),
    ('\u{FF6F}', "<narrow> 30C3"),
    ('\u{FF70}', "<narrow> 30FC"),
    ('\u{FF71}', "<narrow> 30A2"),
    ('\u{FF72}', "<narrow> 30A4"),
    ('\u{FF73}', "<narrow> 30A6"),
    ('\u{FF74}', "<narrow> 30A8"),
    ('\u{FF75}', "<narrow> 30AA"),
    ('\u{FF76}', "<narrow> 30AB"),
    ('\u{FF77}', "<narrow> 30AD"),
    ('\u{FF78}', "<narrow> 30AF"),
    ('\u{FF79}', "<narrow> 30B1"),
    ('\u{FF7A}', "<narrow> 30B3"),
    ('\u{FF7B}', "<narrow> 30B5"),
    ('\u{FF7C}', "<narrow> 30B7"),
    ('\u{FF7D}', "<narrow> 30B9"),
    ('\u{FF7E}', "<narrow> 30BB"),
    ('\u{FF7F}', "<narrow> 30BD"),
    ('\u{FF80}', "<narrow> 30BF"),
    ('\u{FF81}', "<narrow> 30C1"),
    ('\u{FF82}', "<narrow> 30C4"),
    ('\u{FF83}', "<narrow> 30C6"),
    ('\u{FF84}', "<narrow> 30C8"),
    ('\u{FF85}', "<narrow> 30CA"),
    ('\u{FF86}', "<narrow> 30CB"),
    ('\u{FF87}', "<narrow> 30CC"),
    ('\u{FF88}', "<narrow> 30CD"),
    ('\u{FF89}', "<narrow> 30CE"),
    ('\u{FF8A}', "<narrow> 30CF"),
    ('\u{FF8B}', "<narrow> 30D2"),
    ('\u{FF8C}', "<narrow> 30D5"),
    ('\u{FF8D}', "<narrow> 30D8"),
    ('\u{FF8E}', "<narrow> 30DB"),
    ('\u{FF8F}', "<narrow> 30DE"),
    ('\u{FF90}', "<narrow> 30DF"),
    ('\u{FF91}', "<narrow> 30E0"),
    ('\u{FF92}', "<narrow> 30E1"),
    ('\u{FF93}', "<narrow> 30E2"),
    ('\u{FF94}', "<narrow> 30E4"),
    ('\u{FF95}', "<narrow> 30E6"),
    ('\u{FF96}', "<narrow> 30E8"),
    ('\u{FF97}', "<narrow> 30E9"),
    ('\u{FF98}', "<narrow> 30EA"),
    ('\u{FF99}', "<narrow> 30EB"),
    ('\u{FF9A}', "<narrow> 30EC"),
    ('\u{FF9B}', "<narrow> 30ED"),
    ('\u{FF9C}', "<narrow> 30EF"),
    ('\u{FF9D}', "<narrow> 30F3"),
    ('\u{FF9E}', "<narrow> 3099"),
    ('\u{FF9F}', "<narrow> 309A"),
    ('\u{FFA0}', "<narrow> 3164"),
    ('\u{FFA1}', "<narrow> 3131"),
    ('\u{FFA2}', "<narrow> 3132"),
    ('\u{FFA3}', "<narrow> 3133"),
    ('\u{FFA4}', "<narrow> 3134"),
    ('\u{FFA5}', "<narrow> 3135"),
    ('\u{FFA6}', "<narrow> 3136"),
    ('\u{FFA7}', "<narrow> 3137"),
    ('\u{FFA8}', "<narrow> 3138"),
    ('\u{FFA9}', "<narrow> 3139"),
    ('\u{FFAA}', "<narrow> 313A"),
    ('\u{FFAB}', "<narrow> 313B"),
    ('\u{FFAC}', "<narrow> 313C"),
    ('\u{FFAD}', "<narrow> 313D"),
    ('\u{FFAE}', "<narrow> 313E"),
    ('\u{FFAF}', "<narrow> 313F"),
    ('\u{FFB0}', "<narrow> 3140"),
    ('\u{FFB1}', "<narrow> 3141"),
    ('\u{FFB2}', "<narrow> 3142"),
    ('\u{FFB3}', "<narrow> 3143"),
    ('\u{FFB4}', "<narrow> 3144"),
    ('\u{FFB5}', "<narrow> 3145"),
    ('\u{FFB6}', "<narrow> 3146"),
    ('\u{FFB7}', "<narrow> 3147"),
    ('\u{FFB8}', "<narrow> 3148"),
    ('\u{FFB9}', "<narrow> 3149"),
    ('\u{FFBA}', "<narrow> 314A"),
    ('\u{FFBB}', "<narrow> 314B"),
    ('\u{FFBC}', "<narrow> 314C"),
    ('\u{FFBD}', "<narrow> 314D"),
    ('\u{FFBE}', "<narrow> 314E"),
    ('\u{FFC2}', "<narrow> 314F"),
    ('\u{FFC3}', "<narrow> 3150"),
    ('\u{FFC4}', "<narrow> 3151"),
    ('\u{FFC5}', "<narrow> 3152"),
    ('\u{FFC6}', "<narrow> 3153"),
    ('\u{FFC7}', "<narrow> 3154"),
    ('\u{FFCA}', "<narrow> 3155"),
    ('\u{FFCB}', "<narrow> 3156"),
    ('\u{FFCC}', "<narrow> 3157"),
    ('\u{FFCD}', "<narrow> 3158"),
    ('\u{FFCE}', "<narrow> 3159"),
    ('\u{FFCF}', "<narrow> 315A"),
    ('\u{FFD2}', "<narrow> 315B"),
    ('\u{FFD3}', "<narrow> 315C"),
    ('\u{FFD4}', "<narrow> 315D"),
    ('\u{FFD5}', "<narrow> 315E"),
    ('\u{FFD6}', "<narrow> 315F"),
    ('\u{FFD7}', "<narrow> 3160"),
    ('\u{FFDA}', "<narrow> 3161"),
    ('\u{FFDB}', "<narrow> 3162"),
    ('\u{FFDC}', "<narrow> 3163"),
    ('\u{FFE0}', "<wide> 00A2"),
    ('\u{FFE1}', "<wide> 00A3"),
    ('\u{FFE2}', "<wide> 00AC"),
    ('\u{FFE3}', "<wide> 00AF"),
    ('\u{FFE4}', "<wide> 00A6"),
    ('\u{FFE5}', "<wide> 00A5"),
    ('\u{FFE6}', "<wide> 20A9"),
    ('\u{FFE8}', "<narrow> 2502"),
    ('\u{FFE9}', "<narrow> 2190"),
    ('\u{FFEA}', "<narrow> 2191"),
    ('\u{FFEB}', "<narrow> 2192"),
    ('\u{FFEC}', "<narrow> 2193"),
    ('\u{FFED}', "<narrow> 25A0"),
    ('\u{FFEE}', "<narrow> 25CB"),
    ('\u{10781}', "<super> 02D0"),
    ('\u{10782}', "<super> 02D1"),
    ('\u{10783}', "<super> 00E6"),
    ('\u{10784}', "<super> 0299"),
    ('\u{10785}', "<super> 0253"),
    ('\u{10787}', "<super> 02A3"),
    ('\u{10788}', "<super> AB66"),
    ('\u{10789}', "<super> 02A5"),
    ('\u{1078A}', "<super> 02A4"),
    ('\u{1078B}', "<super> 0256"),
    ('\u{1078C}', "<super> 0257"),
    ('\u{1078D}', "<super> 1D91"),
    ('\u{1078E}', "<super> 0258"),
    ('\u{1078F}', "<super> 025E"),
    ('\u{10790}', "<super> 02A9"),
    ('\u{10791}', "<super> 0264"),
    ('\u{10792}', "<super> 0262"),
    ('\u{10793}', "<super> 0260"),
    ('\u{10794}', "<super> 029B"),
    ('\u{10795}', "<super> 0127"),
    ('\u{10796}', "<super> 029C"),
    ('\u{10797}', "<super> 0267"),
    ('\u{10798}', "<super> 0284"),
    ('\u{10799}', "<super> 02AA"),
    ('\u{1079A}', "<super> 02AB"),
    ('\u{1079B}', "<super> 026C"),
    ('\u{1079C}', "<super> 1DF04"),
    ('\u{1079D}', "<super> A78E"),
    ('\u{1079E}', "<super> 026E"),
    ('\u{1079F}', "<super> 1DF05"),
    ('\u{107A0}', "<super> 028E"),
    ('\u{107A1}', "<super> 1DF06"),
    ('\u{107A2}', "<super> 00F8"),
    ('\u{107A3}', "<super> 0276"),
    ('\u{107A4}', "<super> 0277"),
    ('\u{107A5}', "<super> 0071"),
    ('\u{107A6}', "<super> 027A"),
    ('\u{107A7}', "<super> 1DF08"),
    ('\u{107A8}', "<super> 027D"),
    ('\u{107A9}', "<super> 027E"),
    ('\u{107AA}', "<super> 0280"),
    ('\u{107AB}', "<super> 02A8"),
    ('\u{107AC}', "<super> 02A6"),
    ('\u{107AD}', "<super> AB67"),
    ('\u{107AE}', "<super> 02A7"),
    ('\u{107AF}', "<super> 0288"),
    ('\u{107B0}', "<super> 2C71"),
    ('\u{107B2}', "<super> 028F"),
    ('\u{107B3}', "<super> 02A1"),
    ('\u{107B4}', "<super> 02A2"),
    ('\u{107B5}', "<super> 0298"),
    ('\u{107B6}', "<super> 01C0"),
    ('\u{107B7}', "<super> 01C1"),
    ('\u{107B8}', "<super> 01C2"),
    ('\u{107B9}', "<super> 1DF0A"),
    ('\u{107BA}', "<super> 1DF1E"),
    ('\u{1109A}', "11099 110BA"),
    ('\u{1109C}', "1109B 110BA"),
    ('\u{110AB}', "110A5 110BA"),
    ('\u{1112E}', "11131 11127"),
    ('\u{1112F}', "11132 11127"),
    ('\u{1134B}', "11347 1133E"),
    ('\u{1134C}', "11347 11357"),
    ('\u{114BB}', "114B9 114BA"),
    ('\u{114BC}', "114B9 114B0"),
    ('\u{114BE}', "114B9 114BD"),
    ('\u{115BA}', "115B8 115AF"),
    ('\u{115BB}', "115B9 115AF"),
    ('\u{11938}', "11935 11930"),
    ('\u{1D15E}', "1D157 1D165"),
    ('\u{1D15F}', "1D158 1D165"),
    ('\u{1D160}', "1D15F 1D16E"),
    ('\u{1D161}', "1D15F 1D16F"),
    ('\u{1D162}', "1D15F 1D170"),
    ('\u{1D163}', "1D15F 1D171"),
    ('\u{1D164}', "1D15F 1D172"),
    ('\u{1D1BB}', "1D1B9 1D165"),
    ('\u{1D1BC}', "1D1BA 1D165"),
    ('\u{1D1BD}', "1D1BB 1D16E"),
    ('\u{1D1BE}', "1D1BC 1D16E"),
    ('\u{1D1BF}', "1D1BB 1D16F"),
    ('\u{1D1C0}', "1D1BC 1D16F"),
    ('\u{1D400}', "<font> 0041"),
    ('\u{1D401}', "<font> 0042"),
    ('\u{1D402}', "<font> 0043"),
    ('\u{1D403}', "<font> 0044"),
    ('\u{1D404}', "<font> 0045"),
    ('\u{1D405}', "<font> 0046"),
    ('\u{1D406}', "<font> 0047"),
    ('\u{1D407}', "<font> 0048"),
    ('\u{1D408}', "<font> 0049"),
    ('\u{1D409}', "<font> 004A"),
    ('\u{1D40A}', "<font> 004B"),
    ('\u{1D40B}', "<font> 004C"),
    ('\u{1D40C}', "<font> 004D"),
    ('\u{1D40D}', "<font> 004E"),
    ('\u{1D40E}', "<font> 004F"),
    ('\u{1D40F}', "<font> 0050"),
    ('\u{1D410}', "<font> 0051"),
    ('\u{1D411}', "<font> 0052"),
    ('\u{1D412}', "<font> 0053"),
    ('\u{1D413}', "<font> 0054"),
    ('\u{1D414}', "<font> 0055"),
    ('\u{1D415}', "<font> 0056"),
    ('\u{1D416}', "<font> 0057"),
    ('\u{1D417}', "<font> 0058"),
    ('\u{1D418}', "<font> 0059"),
    ('\u{1D419}', "<font> 005A"),
    ('\u{1D41A}', "<font> 0061"),
    ('\u{1D41B}', "<font> 0062"),
    ('\u{1D41C}', "<font> 0063"),
    ('\u{1D41D}', "<font> 0064"),
    ('\u{1D41E}', "<font> 0065"),
    ('\u{1D41F}', "<font> 0066"),
    ('\u{1D420}', "<font> 0067"),
    ('\u{1D421}', "<font> 0068"),
    ('\u{1D422}', "<font> 0069"),
    ('\u{1D423}', "<font> 006A"),
    ('\u{1D424}', "<font> 006B"),
    ('\u{1D425}', "<font> 006C"),
    ('\u{1D426}', "<font> 006D"),
    ('\u{1D427}', "<font> 006E"),
    ('\u{1D428}', "<font> 006F"),
    ('\u{1D429}', "<font> 0070"),
    ('\u{1D42A}', "<font> 0071"),
    ('\u{1D42B}', "<font> 0072"),
    ('\u{1D42C}', "<font> 0073"),
    ('\u{1D42D}', "<font> 0074"),
    ('\u{1D42E}', "<font> 0075"),
    ('\u{1D42F}', "<font> 0076"),
    ('\u{1D430}', "<font> 0077"),
    ('\u{1D431}', "<font> 0078"),
    ('\u{1D432}', "<font> 0079"),
    ('\u{1D433}', "<font> 007A"),
    ('\u{1D434}', "<font> 0041"),
    ('\u{1D435}', "<font> 0042"),
    ('\u{1D436}', "<font> 0043"),
    ('\u{1D437}', "<font> 0044"),
    ('\u{1D438}', "<font> 0045"),
    ('\u{1D439}', "<font> 0046"),
    ('\u{1D43A}', "<font> 0047"),
    ('\u{1D43B}', "<font> 0048"),
    ('\u{1D43C}', "<font> 0049"),
    ('\u{1D43D}', "<font> 004A"),
    ('\u{1D43E}', "<font> 004B"),
    ('\u{1D43F}', "<font> 004C"),
    ('\u{1D440}', "<font> 004D"),
    ('\u{1D441}', "<font> 004E"),
    ('\u{1D442}', "<font> 004F"),
    ('\u{1D443}', "<font> 0050"),
    ('\u{1D444}', "<font> 0051"),
    ('\u{1D445}', "<font> 0052"),
    ('\u{1D446}', "<font> 0053"),
    ('\u{1D447}', "<font> 0054"),
    ('\u{1D448}', "<font> 0055"),
    ('\u{1D449}', "<font> 0056"),
    ('\u{1D44A}', "<font> 0057"),
    ('\u{1D44B}', "<font> 0058"),
    ('\u{1D44C}', "<font> 0059"),
    ('\u{1D44D}', "<font> 005A"),
    ('\u{1D44E}', "<font> 0061"),
    ('\u{1D44F}', "<font> 0062"),
    ('\u{1D450}', "<font> 0063"),
    ('\u{1D451}', "<font> 0064"),
    ('\u{1D452}', "<font> 0065"),
    ('\u{1D453}', "<font> 0066"),
    ('\u{1D454}', "<font> 0067"),
    ('\u{1D456}', "<font> 0069"),
    ('\u{1D457}', "<font> 006A"),
    ('\u{1D458}', "<font> 006B"),
    ('\u{1D459}', "<font> 006C"),
    ('\u{1D45A}', "<font> 006D"),
    ('\u{1D45B}', "<font> 006E"),
    ('\u{1D45C}', "<font> 006F"),
    ('\u{1D45D}', "<font> 0070"),
    ('\u{1D45E}', "<font> 0071"),
    ('\u{1D45F}', "<font> 0072"),
    ('\u{1D460}', "<font> 0073"),
    ('\u{1D461}', "<font> 0074"),
    ('\u{1D462}', "<font> 0075"),
    ('\u{1D463}', "<font> 0076"),
    ('\u{1D464}', "<font> 0077"),
    ('\u{1D465}', "<font> 0078"),
    ('\u{1D466}', "<font> 0079"),
    ('\u{1D467}', "<font> 007A"),
    ('\u{1D468}', "<font> 0041"),
    ('\u{1D469}', "<font> 0042"),
    ('\u{1D46A}', "<font> 0043"),
    ('\u{1D46B}', "<font> 0044"),
    ('\u{1D46C}', "<font> 0045"),
    ('\u{1D46D}', "<font> 0046"),
    ('\u{1D46E}', "<font> 0047"),
    ('\u{1D46F}', "<font> 0048"),
    ('\u{1D470}', "<font> 0049"),
    ('\u{1D471}', "<font> 004A"),
    ('\u{1D472}', "<font> 004B"),
    ('\u{1D473}', "<font> 004C"),
    ('\u{1D474}', "<font> 004D"),
    ('\u{1D475}', "<font> 004E"),
    ('\u{1D476}', "<font> 004F"),
    ('\u{1D477}', "<font> 0050"),
    ('\u{1D478}', "<font> 0051"),
    ('\u{1D479}', "<font> 0052"),
    ('\u{1D47A}', "<font> 0053"),
    ('\u{1D47B}', "<font> 0054"),
    ('\u{1D47C}', "<font> 0055"),
    ('\u{1D47D}', "<font> 0056"),
    ('\u{1D47E}', "<font> 0057"),
    ('\u{1D47F}', "<font> 0058"),
    ('\u{1D480}', "<font> 0059"),
    ('\u{1D481}', "<font> 005A"),
    ('\u{1D482}', "<font> 0061"),
    ('\u{1D483}', "<font> 0062"),
    ('\u{1D484}', "<font> 0063"),
    ('\u{1D485}', "<font> 0064"),
    ('\u{1D486}', "<font> 0065"),
    ('\u{1D487}', "<font> 0066"),
    ('\u{1D488}', "<font> 0067"),
    ('\u{1D489}', "<font> 0068"),
    ('\u{1D48A}', "<font> 0069"),
    ('\u{1D48B}', "<font> 006A"),
    ('\u{1D48C}', "<font> 006B"),
    ('\u{1D48D}', "<font> 006C"),
    ('\u{1D48E}', "<font> 006D"),
    ('\u{1D48F}', "<font> 006E"),
    ('\u{1D490}', "<font> 006F"),
    ('\u{1D491}', "<font> 0070"),
    ('\u{1D492}', "<font> 0071"),
    ('\u{1D493}', "<font> 0072"),
    ('\u{1D494}', "<font> 0073"),
    ('\u{1D495}', "<font> 0074"),
    ('\u{1D496}', "<font> 0075"),
    ('\u{1D497}', "<font> 0076"),
    ('\u{1D498}', "<font> 0077"),
    ('\u{1D499}', "<font> 0078"),
    ('\u{1D49A}', "<font> 0079"),
    ('\u{1D49B}', "<font> 007A"),
    ('\u{1D49C}', "<font> 0041"),
    ('\u{1D49E}', "<font> 0043"),
    ('\u{1D49F}', "<font> 0044"),
    ('\u{1D4A2}', "<font> 0047"),
    ('\u{1D4A5}', "<font> 004A"),
    ('\u{1D4A6}', "<font> 004B"),
    ('\u{1D4A9}', "<font> 004E"),
    ('\u{1D4AA}', "<font> 004F"),
    ('\u{1D4AB}', "<font> 0050"),
    ('\u{1D4AC}', "<font> 0051"),
    ('\u{1D4AE}', "<font> 0053"),
    ('\u{1D4AF}', "<font> 0054"),
    ('\u{1D4B0}', "<font> 0055"),
    ('\u{1D4B1}', "<font> 0056"),
    ('\u{1D4B2}', "<font> 0057"),
    ('\u{1D4B3}', "<font> 0058"),
    ('\u{1D4B4}', "<font> 0059"),
    ('\u{1D4B5}', "<font> 005A"),
    ('\u{1D4B6}', "<font> 0061"),
    ('\u{1D4B7}', "<font> 0062"),
    ('\u{1D4B8}', "<font> 0063"),
    ('\u{1D4B9}', "<font> 0064"),
    ('\u{1D4BB}', "<font> 0066"),
    ('\u{1D4BD}', "<font> 0068"),
    ('\u{1D4BE}', "<font> 0069"),
    ('\u{1D4BF}', "<font> 006A"),
    ('\u{1D4C0}', "<font> 006B"),
    ('\u{1D4C1}', "<font> 006C"),
    ('\u{1D4C2}', "<font> 006D"),
    ('\u{1D4C3}', "<font> 006E"),
    ('\u{1D4C5}', "<font> 0070"),
    ('\u{1D4C6}', "<font> 0071"),
    ('\u{1D4C7}', "<font> 0072"),
    ('\u{1D4C8}', "<font> 0073"),
    ('\u{1D4C9}', "<font> 0074"),
    ('\u{1D4CA}', "<font> 0075"),
    ('\u{1D4CB}', "<font> 0076"),
    ('\u{1D4CC}', "<font> 0077"),
    ('\u{1D4CD}', "<font> 0078"),
    ('\u{1D4CE}', "<font> 0079"),
    ('\u{1D4CF}', "<font> 007A"),
    ('\u{1D4D0}', "<font> 0041"),
    ('\u{1D4D1}', "<font> 0042"),
    ('\u{1D4D2}', "<font> 0043"),
    ('\u{1D4D3}', "<font> 0044"),
    ('\u{1D4D4}', "<font> 0045"),
    ('\u{1D4D5}', "<font> 0046"),
    ('\u{1D4D6}', "<font> 0047"),
    ('\u{1D4D7}', "<font> 0048"),
    ('\u{1D4D8}', "<font> 0049"),
    ('\u{1D4D9}', "<font> 004A"),
    ('\u{1D4DA}', "<font> 004B"),
    ('\u{1D4DB}', "<font> 004C"),
    ('\u{1D4DC}', "<font> 004D"),
    ('\u{1D4DD}', "<font> 004E"),
    ('\u{1D4DE}', "<font> 004F"),
    ('\u{1D4DF}', "<font> 0050"),
    ('\u{1D4E0}', "<font> 0051"),
    ('\u{1D4E1}', "<font> 0052"),
    ('\u{1D4E2}', "<font> 0053"),
    ('\u{1D4E3}', "<font> 0054"),
    ('\u{1D4E4}', "<font> 0055"),
    ('\u{1D4E5}', "<font> 0056"),
    ('\u{1D4E6}', "<font> 0057"),
    ('\u{1D4E7}', "<font> 0058"),
    ('\u{1D4E8}', "<font> 0059"),
    ('\u{1D4E9}', "<font> 005A"),
    ('\u{1D4EA}', "<font> 0061"),
    ('\u{1D4EB}', "<font> 0062"),
    ('\u{1D4EC}', "<font> 0063"),
    ('\u{1D4ED}', "<font> 0064"),
    ('\u{1D4EE}', "<font> 0065"),
    ('\u{1D4EF}', "<font> 0066"),
    ('\u{1D4F0}', "<font> 0067"),
    ('\u{1D4F1}', "<font> 0068"),
    ('\u{1D4F2}', "<font> 0069"),
    ('\u{1D4F3}', "<font> 006A"),
    ('\u{1D4F4}', "<font> 006B"),
    ('\u{1D4F5}', "<font> 006C"),
    ('\u{1D4F6}', "<font> 006D"),
    ('\u{1D4F7}', "<font> 006E"),
    ('\u{1D4F8}', "<font> 006F"),
    ('\u{1D4F9}', "<font> 0070"),
    ('\u{1D4FA}', "<font> 0071"),
    ('\u{1D4FB}', "<font> 0072"),
    ('\u{1D4FC}', "<font> 0073"),
    ('\u{1D4FD}', "<font> 0074"),
    ('\u{1D4FE}', "<font> 0075"),
    ('\u{1D4FF}', "<font> 0076"),
    ('\u{1D500}', "<font> 0077"),
    ('\u{1D501}', "<font> 0078"),
    ('\u{1D502}', "<font> 0079"),
    ('\u{1D503}', "<font> 007A"),
    ('\u{1D504}', "<font> 0041"),
    ('\u{1D505}', "<font> 0042"),
    ('\u{1D507}', "<font> 0044"),
    ('\u{1D508}', "<font> 0045"),
    ('\u{1D509}', "<font> 0046"),
    ('\u{1D50A}', "<font> 0047"),
    ('\u{1D50D}', "<font> 004A"),
    ('\u{1D50E}', "<font> 004B"),
    ('\u{1D50F}', "<font> 004C"),
    ('\u{1D510}', "<font> 004D"),
    ('\u{1D511}', "<font> 004E"),
    ('\u{1D512}', "<font> 004F"),
    ('\u{1D513}', "<font> 0050"),
    ('\u{1D514}', "<font> 0051"),
    ('\u{1D516}', "<font> 0053"),
    ('\u{1D517}', "<font> 0054"),
    ('\u{1D518}', "<font> 0055"),
    ('\u{1D519}', "<font> 0056"),
    ('\u{1D51A}', "<font> 0057"),
    ('\u{1D51B}', "<font> 0058"),
    ('\u{1D51C}', "<font> 0059"),
    ('\u{1D51E}', "<font> 0061"),
    ('\u{1D51F}', "<font> 0062"),
    ('\u{1D520}', "<font> 0063"),
    ('\u{1D521}', "<font> 0064"),
    ('\u{1D522}', "<font> 0065"),
    ('\u{1D523}', "<font> 0066"),
    ('\u{1D524}', "<font> 0067"),
    ('\u{1D525}', "<font> 0068"),
    ('\u{1D526}', "<font> 0069"),
    ('\u{1D527}', "<font> 006A"),
    ('\u{1D528}', "<font> 006B"),
    ('\u{1D529}', "<font> 006C"),
    ('\u{1D52A}', "<font> 006D"),
    ('\u{1D52B}', "<font> 006E"),
    ('\u{1D52C}', "<font> 006F"),
    ('\u{1D52D}', "<font> 0070"),
    ('\u{1D52E}', "<font> 0071"),
    ('\u{1D52F}', "<font> 0072"),
    ('\u{1D530}', "<font> 0073"),
    ('\u{1D531}', "<font> 0074"),
    ('\u{1D532}', "<font> 0075"),
    ('\u{1D533}', "<font> 0076"),
    ('\u{1D534}', "<font> 0077"),
    ('\u{1D535}', "<font> 0078"),
    ('\u{1D536}', "<font> 0079"),
    ('\u{1D537}', "<font> 007A"),
    ('\u{1D538}', "<font> 0041"),
    ('\u{1D539}', "<font> 0042"),
    ('\u{1D53B}', "<font> 0044"),
    ('\u{1D53C}', "<font> 0045"),
    ('\u{1D53D}', "<font> 0046"),
    ('\u{1D53E}', "<font> 0047"),
    ('\u{1D540}', "<font> 0049"),
    ('\u{1D541}', "<font> 004A"),
    ('\u{1D542}', "<font> 004B"),
    ('\u{1D543}', "<font> 004C"),
    ('\u{1D544}', "<font> 004D"),
    ('\u{1D546}', "<font> 004F"),
    ('\u{1D54A}', "<font> 0053"),
    ('\u{1D54B}', "<font> 0054"),
    ('\u{1D54C}', "<font> 0055"),
    ('\u{1D54D}', "<font> 0056"),
    ('\u{1D54E}', "<font> 0057"),
    ('\u{1D54F}', "<font> 0058"),
    ('\u{1D550}', "<font> 0059"),
    ('\u{1D552}', "<font> 0061"),
    ('\u{1D553}', "<font> 0062"),
    ('\u{1D554}', "<font> 0063"),
    ('\u{1D555}', "<font> 0064"),
    ('\u{1D556}', "<font> 0065"),
    ('\u{1D557}', "<font> 0066"),
    ('\u{1D558}', "<font> 0067"),
    ('\u{1D559}', "<font> 0068"),
    ('\u{1D55A}', "<font> 0069"),
    ('\u{1D55B}', "<font> 006A"),
    ('\u{1D55C}', "<font> 006B"),
    ('\u{1D55D}', "<font> 006C"),
    ('\u{1D55E}', "<font> 006D"),
    ('\u{1D55F}', "<font> 006E"),
    ('\u{1D560}', "<font> 006F"),
    ('\u{1D561}', "<font> 0070"),
    ('\u{1D562}', "<font> 0071"),
    ('\u{1D563}', "<font> 0072"),
    ('\u{1D564}', "<font> 0073"),
    ('\u{1D565}', "<font> 0074"),
    ('\u{1D566}', "<font> 0075"),
    ('\u{1D567}', "<font> 0076"),
    ('\u{1D568}', "<font> 0077"),
    ('\u{1D569}', "<font> 0078"),
    ('\u{1D56A}', "<font> 0079"),
    ('\u{1D56B}', "<font> 007A"),
    ('\u{1D56C}', "<font> 0041"),
    ('\u{1D56D}', "<font> 0042"),
    ('\u{1D56E}', "<font> 0043"),
    ('\u{1D56F}', "<font> 0044"),
    ('\u{1D570}', "<font> 0045"),
    ('\u{1D571}', "<font> 0046"),
    ('\u{1D572}', "<font> 0047"),
    ('\u{1D573}', "<font> 0048"),
    ('\u{1D574}', "<font> 0049"),
    ('\u{1D575}', "<font> 004A"),
    ('\u{1D576}', "<font> 004B"),
    ('\u{1D577}', "<font> 004C"),
    ('\u{1D578}', "<font> 004D"),
    ('\u{1D579}', "<font> 004E"),
    ('\u{1D57A}', "<font> 004F"),
    ('\u{1D57B}', "<font> 0050"),
    ('\u{1D57C}', "<font> 0051"),
    ('\u{1D57D}', "<font> 0052"),
    ('\u{1D57E}', "<font> 0053"),
    ('\u{1D57F}', "<font> 0054"),
    ('\u{1D580}', "<font> 0055"),
    ('\u{1D581}', "<font> 0056"),
    ('\u{1D582}', "<font> 0057"),
    ('\u{1D583}', "<font> 0058"),
    ('\u{1D584}', "<font> 0059"),
    ('\u{1D585}', "<font> 005A"),
    ('\u{1D586}', "<font> 0061"),
    ('\u{1D587}', "<font> 0062"),
    ('\u{1D588}', "<font> 0063"),
    ('\u{1D589}', "<font> 0064"),
    ('\u{1D58A}', "<font> 0065"),
    ('\u{1D58B}', "<font> 0066"),
    ('\u{1D58C}', "<font> 0067"),
    ('\u{1D58D}', "<font> 0068"),
    ('\u{1D58E}', "<font> 0069"),
    ('\u{1D58F}', "<font> 006A"),
    ('\u{1D590}', "<font> 006B"),
    ('\u{1D591}', "<font> 006C"),
    ('\u{1D592}', "<font> 006D"),
    ('\u{1D593}', "<font> 006E"),
    ('\u{1D594}', "<font> 006F"),
    ('\u{1D595}', "<font> 0070"),
    ('\u{1D596}', "<font> 0071"),
    ('\u{1D597}', "<font> 0072"),
    ('\u{1D598}', "<font> 0073"),
    ('\u{1D599}', "<font> 0074"),
    ('\u{1D59A}', "<font> 0075"),
    ('\u{1D59B}', "<font> 0076"),
    ('\u{1D59C}', "<font> 0077"),
    ('\u{1D59D}', "<font> 0078"),
    ('\u{1D59E}', "<font> 0079"),
    ('\u{1D59F}', "<font> 007A"),
    ('\u{1D5A0}', "<font> 0041"),
    ('\u{1D5A1}', "<font> 0042"),
    ('\u{1D5A2}', "<font> 0043"),
    ('\u{1D5A3}', "<font> 0044"),
    ('\u{1D5A4}', "<font> 0045"),
    ('\u{1D5A5}', "<font> 0046"),
    ('\u{1D5A6}', "<font> 0047"),
    ('\u{1D5A7}', "<font> 0048"),
    ('\u{1D5A8}', "<font> 0049"),
    ('\u{1D5A9}', "<font> 004A"),
    ('\u{1D5AA}', "<font> 004B"),
    ('\u{1D5AB}', "<font> 004C"),
    ('\u{1D5AC}', "<font> 004D"),
    ('\u{1D5AD}', "<font> 004E"),
    ('\u{1D5AE}', "<font> 004F"),
    ('\u{1D5AF}', "<font> 0050"),
    ('\u{1D5B0}', "<font> 0051"),
    ('\u{1D5B1}', "<font> 0052"),
    ('\u{1D5B2}', "<font> 0053"),
    ('\u{1D5B3}', "<font> 0054"),
    ('\u{1D5B4}', "<font> 0055"),
    ('\u{1D5B5}', "<font> 0056"),
    ('\u{1D5B6}', "<font> 0057"),
    ('\u{1D5B7}', "<font> 0058"),
    ('\u{1D5B8}', "<font> 0059"),
    ('\u{1D5B9}', "<font> 005A"),
    ('\u{1D5BA}', "<font> 0061"),
    ('\u{1D5BB}', "<font> 0062"),
    ('\u{1D5BC}', "<font> 0063"),
    ('\u{1D5BD}', "<font> 0064"),
    ('\u{1D5BE}', "<font> 0065"),
    ('\u{1D5BF}', "<font> 0066"),
    ('\u{1D5C0}', "<font> 0067"),
    ('\u{1D5C1}', "<font> 0068"),
    ('\u{1D5C2}', "<font> 0069"),
    ('\u{1D5C3}', "<font> 006A"),
    ('\u{1D5C4}', "<font> 006B"),
    ('\u{1D5C5}', "<font> 006C"),
    ('\u{1D5C6}', "<font> 006D"),
    ('\u{1D5C7}', "<font> 006E"),
    ('\u{1D5C8}', "<font> 006F"),
    ('\u{1D5C9}', "<font> 0070"),
    ('\u{1D5CA}', "<font> 0071"),
    ('\u{1D5CB}', "<font> 0072"),
    ('\u{1D5CC}', "<font> 0073"),
    ('\u{1D5CD}', "<font> 0074"),
    ('\u{1D5CE}', "<font> 0075"),
    ('\u{1D5CF}', "<font> 0076"),
    ('\u{1D5D0}', "<font> 0077"),
    ('\u{1D5D1}', "<font> 0078"),
    ('\u{1D5D2}', "<font> 0079"),
    ('\u{1D5D3}', "<font> 007A"),
    ('\u{1D5D4}', "<font> 0041"),
    ('\u{1D5D5}', "<font> 0042"),
    ('\u{1D5D6}', "<font> 0043"),
    ('\u{1D5D7}', "<font> 0044"),
    ('\u{1D5D8}', "<font> 0045"),
    ('\u{1D5D9}', "<font> 0046"),
    ('\u{1D5DA}', "<font> 0047"),
    ('\u{1D5DB}', "<font> 0048"),
    ('\u{1D5DC}', "<font> 0049"),
    ('\u{1D5DD}', "<font> 004A"),
    ('\u{1D5DE}', "<font> 004B"),
    ('\u{1D5DF}', "<font> 004C"),
    ('\u{1D5E0}', "<font> 004D"),
    ('\u{1D5E1}', "<font> 004E"),
    ('\u{1D5E2}', "<font> 004F"),
    ('\u{1D5E3}', "<font> 0050"),
    ('\u{1D5E4}', "<font> 0051"),
    ('\u{1D5E5}', "<font> 0052"),
    ('\u{1D5E6}', "<font> 0053"),
    ('\u{1D5E7}', "<font> 0054"),
    ('\u{1D5E8}', "<font> 0055"),
    ('\u{1D5E9}', "<font> 0056"),
    ('\u{1D5EA}', "<font> 0057"),
    ('\u{1D5EB}', "<font> 0058"),
    ('\u{1D5EC}', "<font> 0059"),
    ('\u{1D5ED}', "<font> 005A"),
    ('\u{1D5EE}', "<font> 0061"),
    ('\u{1D5EF}', "<font> 0062"),
    ('\u{1D5F0}', "<font> 0063"),
    ('\u{1D5F1}', "<font> 0064"),
    ('\u{1D5F2}', "<font> 0065"),
    ('\u{1D5F3}', "<font> 0066"),
    ('\u{1D5F4}', "<font> 0067"),
    ('\u{1D5F5}', "<font> 0068"),
    ('\u{1D5F6}', "<font> 0069"),
    ('\u{1D5F7}', "<font> 006A"),
    ('\u{1D5F8}', "<font> 006B"),
    ('\u{1D5F9}', "<font> 006C"),
    ('\u{1D5FA}', "<font> 006D"),
    ('\u{1D5FB}', "<font> 006E"),
    ('\u{1D5FC}', "<font> 006F"),
    ('\u{1D5FD}', "<font> 0070"),
    ('\u{1D5FE}', "<font> 0071"),
    ('\u{1D5FF}', "<font> 0072"),
    ('\u{1D600}', "<font> 0073"),
    ('\u{1D601}', "<font> 0074"),
    ('\u{1D602}', "<font> 0075"),
    ('\u{1D603}', "<font> 0076"),
    ('\u{1D604}', "<font> 0077"),
    ('\u{1D605}', "<font> 0078"),
    ('\u{1D606}', "<font> 0079"),
    ('\u{1D607}', "<font> 007A"),
    ('\u{1D608}', "<font> 0041"),
    ('\u{1D609}', "<font> 0042"),
    ('\u{1D60A}', "<font> 0043"),
    ('\u{1D60B}', "<font> 0044"),
    ('\u{1D60C}', "<font> 0045"),
    ('\u{1D60D}', "<font> 0046"),
    ('\u{1D60E}', "<font> 0047"),
    ('\u{1D60F}', "<font> 0048"),
    ('\u{1D610}', "<font> 0049"),
    ('\u{1D611}', "<font> 004A"),
    ('\u{1D612}', "<font> 004B"),
    ('\u{1D613}', "<font> 004C"),
    ('\u{1D614}', "<font> 004D"),
    ('\u{1D615}', "<font> 004E"),
    ('\u{1D616}', "<font> 004F"),
    ('\u{1D617}', "<font> 0050"),
    ('\u{1D618}', "<font> 0051"),
    ('\u{1D619}', "<font> 0052"),
    ('\u{1D61A}', "<font> 0053"),
    ('\u{1D61B}', "<font> 0054"),
    ('\u{1D61C}', "<font> 0055"),
    ('\u{1D61D}', "<font> 0056"),
    ('\u{1D61E}', "<font> 0057"),
    ('\u{1D61F}', "<font> 0058"),
    ('\u{1D620}', "<font> 0059"),
    ('\u{1D621}', "<font> 005A"),
    ('\u{1D622}', "<font> 0061"),
    ('\u{1D623}', "<font> 0062"),
    ('\u{1D624}', "<font> 0063"),
    ('\u{1D625}', "<font> 0064"),
    ('\u{1D626}', "<font> 0065"),
    ('\u{1D627}', "<font> 0066"),
    ('\u{1D628}', "<font> 0067"),
    ('\u{1D629}', "<font> 0068"),
    ('\u{1D62A}', "<font> 0069"),
    ('\u{1D62B}', "<font> 006A"),
    ('\u{1D62C}', "<font> 006B"),
    ('\u{1D62D}', "<font> 006C"),
    ('\u{1D62E}', "<font> 006D"),
    ('\u{1D62F}', "<font> 006E"),
    ('\u{1D630}', "<font> 006F"),
    ('\u{1D631}', "<font> 0070"),
    ('\u{1D632}', "<font> 0071"),
    ('\u{1D633}', "<font> 0072"),
    ('\u{1D634}', "<font> 0073"),
    ('\u{1D635}', "<font> 0074"),
    ('\u{1D636}', "<font> 0075"),
    ('\u{1D637}', "<font> 0076"),
    ('\u{1D638}', "<font> 0077"),
    ('\u{1D639}', "<font> 0078"),
    ('\u{1D63A}', "<font> 0079"),
    ('\u{1D63B}', "<font> 007A"),
    ('\u{1D63C}', "<font> 0041"),
    ('\u{1D63D}', "<font> 0042"),
    ('\u{1D63E}', "<font> 0043"),
    ('\u{1D63F}', "<font> 0044"),
    ('\u{1D640}', "<font> 0045"),
    ('\u{1D641}', "<font> 0046"),
    ('\u{1D642}', "<font> 0047"),
    ('\u{1D643}', "<font> 0048"),
    ('\u{1D644}', "<font> 0049"),
    ('\u{1D645}', "<font> 004A"),
    ('\u{1D646}', "<font> 004B"),
    ('\u{1D647}', "<font> 004C"),
    ('\u{1D648}', "<font> 004D"),
    ('\u{1D649}', "<font> 004E"),
    ('\u{1D64A}', "<font> 004F"),
    ('\u{1D64B}', "<font> 0050"),
    ('\u{1D64C}', "<font> 0051"),
    ('\u{1D64D}', "<font> 0052"),
    ('\u{1D64E}', "<font> 0053"),
    ('\u{1D64F}', "<font> 0054"),
    ('\u{1D650}', "<font> 0055"),
    ('\u{1D651}', "<font> 0056"),
    ('\u{1D652}', "<font> 0057"),
    ('\u{1D653}', "<font> 0058"),
    ('\u{1D654}', "<font> 0059"),
    ('\u{1D655}', "<font> 005A"),
    ('\u{1D656}', "<font> 0061"),
    ('\u{1D657}', "<font> 0062"),
    ('\u{1D658}', "<font> 0063"),
    ('\u{1D659}', "<font> 0064"),
    ('\u{1D65A}', "<font> 0065"),
    ('\u{1D65B}', "<font> 0066"),
    ('\u{1D65C}', "<font> 0067"),
    ('\u{1D65D}', "<font> 0068"),
    ('\u{1D65E}', "<font> 0069"),
    ('\u{1D65F}', "<font> 006A"),
    ('\u{1D660}', "<font> 006B"),
    ('\u{1D661}', "<font> 006C"),
    ('\u{1D662}', "<font> 006D"),
    ('\u{1D663}', "<font> 006E"),
    ('\u{1D664}', "<font> 006F"),
    ('\u{1D665}', "<font> 0070"),
    ('\u{1D666}', "<font> 0071"),
    ('\u{1D667}', "<font> 0072"),
    ('\u{1D668}', "<font> 0073"),
    ('\u{1D669}', "<font> 0074"),
    ('\u{1D66A}', "<font> 0075"),
    ('\u{1D66B}', "<font> 0076"),
    ('\u{1D66C}', "<font> 0077"),
    ('\u{1D66D}', "<font> 0078"),
    ('\u{1D66E}', "<font> 0079"),
    ('\u{1D66F}', "<font> 007A"),
    ('\u{1D670}', "<font> 0041"),
    ('\u{1D671}', "<font> 0042"),
    ('\u{1D672}', "<font> 0043"),
    ('\u{1D673}', "<font> 0044"),
    ('\u{1D674}', "<font> 0045"),
    ('\u{1D675}', "<font> 0046"),
    ('\u{1D676}', "<font> 0047"),
    ('\u{1D677}', "<font> 0048"),
    ('\u{1D678}', "<font> 0049"),
    ('\u{1D679}', "<font> 004A"),
    ('\u{1D67A}', "<font> 004B"),
    ('\u{1D67B}', "<font> 004C"),
    ('\u{1D67C}', "<font> 004D"),
    ('\u{1D67D}', "<font> 004E"),
    ('\u{1D67E}', "<font> 004F"),
    ('\u{1D67F}', "<font> 0050"),
    ('\u{1D680}', "<font> 0051"),
    ('\u{1D681}', "<font> 0052"),
    ('\u{1D682}', "<font> 0053"),
    ('\u{1D683}', "<font> 0054"),
    ('\u{1D684}', "<font> 0055"),
    ('\u{1D685}', "<font> 0056"),
    ('\u{1D686}', "<font> 0057"),
    ('\u{1D687}', "<font> 0058"),
    ('\u{1D688}', "<font> 0059"),
    ('\u{1D689}', "<font> 005A"),
    ('\u{1D68A}', "<font> 0061"),
    ('\u{1D68B}', "<font> 0062"),
    ('\u{1D68C}', "<font> 0063"),
    ('\u{1D68D}', "<font> 0064"),
    ('\u{1D68E}', "<font> 0065"),
    ('\u{1D68F}', "<font> 0066"),
    ('\u{1D690}', "<font> 0067"),
    ('\u{1D691}', "<font> 0068"),
    ('\u{1D692}', "<font> 0069"),
    ('\u{1D693}', "<font> 006A"),
    ('\u{1D694}', "<font> 006B"),
    ('\u{1D695}', "<font> 006C"),
    ('\u{1D696}', "<font> 006D"),
    ('\u{1D697}', "<font> 006E"),
    ('\u{1D698}', "<font> 006F"),
    ('\u{1D699}', "<font> 0070"),
    ('\u{1D69A}', "<font> 0071"),
    ('\u{1D69B}', "<font> 0072"),
    ('\u{1D69C}', "<font> 0073"),
    ('\u{1D69D}', "<font> 0074"),
    ('\u{1D69E}', "<font> 0075"),
    ('\u{1D69F}', "<font> 0076"),
    ('\u{1D6A0}', "<font> 0077"),
    ('\u{1D6A1}', "<font> 0078"),
    ('\u{1D6A2}', "<font> 0079"),
    ('\u{1D6A3}', "<font> 007A"),
    ('\u{1D6A4}', "<font> 0131"),
    ('\u{1D6A5}', "<font> 0237"),
    ('\u{1D6A8}', "<font> 0391"),
    ('\u{1D6A9}', "<font> 0392"),
    ('\u{1D6AA}', "<font> 0393"),
    ('\u{1D6AB}', "<font> 0394"),
    ('\u{1D6AC}', "<font> 0395"),
    ('\u{1D6AD}', "<font> 0396"),
    ('\u{1D6AE}', "<font> 0397"),
    ('\u{1D6AF}', "<font> 0398"),
    ('\u{1D6B0}', "<font> 0399"),
    ('\u{1D6B1}', "<font> 039A"),
    ('\u{1D6B2}', "<font> 039B"),
    ('\u{1D6B3}', "<font> 039C"),
    ('\u{1D6B4}', "<font> 039D"),
    ('\u{1D6B5}', "<font> 039E"),
    ('\u{1D6B6}', "<font> 039F"),
    ('\u{1D6B7}', "<font> 03A0"),
    ('\u{1D6B8}', "<font> 03A1"),
    ('\u{1D6B9}', "<font> 03F4"),
    ('\u{1D6BA}', "<font> 03A3"),
    ('\u{1D6BB}', "<font> 03A4"),
    ('\u{1D6BC}', "<font> 03A5"),
    ('\u{1D6BD}', "<font> 03A6"),
    ('\u{1D6BE}', "<font> 03A7"),
    ('\u{1D6BF}', "<font> 03A8"),
    ('\u{1D6C0}', "<font> 03A9"),
    ('\u{1D6C1}', "<font> 2207"),
    ('\u{1D6C2}', "<font> 03B1"),
    ('\u{1D6C3}', "<font> 03B2"),
    ('\u{1D6C4}', "<font> 03B3"),
    ('\u{1D6C5}', "<font> 03B4"),
    ('\u{1D6C6}', "<font> 03B5"),
    ('\u{1D6C7}', "<font> 03B6"),
    ('\u{1D6C8}', "<font> 03B7"),
    ('\u{1D6C9}', "<font> 03B8"),
    ('\u{1D6CA}', "<font> 03B9"),
    ('\u{1D6CB}', "<font> 03BA"),
    ('\u{1D6CC}', "<font> 03BB"),
    ('\u{1D6CD}', "<font> 03BC"),
    ('\u{1D6CE}', "<font> 03BD"),
    ('\u{1D6CF}', "<font> 03BE"),
    ('\u{1D6D0}', "<font> 03BF"),
    ('\u{1D6D1}', "<font> 03C0"),
    ('\u{1D6D2}', "<font> 03C1"),
    ('\u{1D6D3}', "<font> 03C2"),
    ('\u{1D6D4}', "<font> 03C3"),
    ('\u{1D6D5}', "<font> 03C4"),
    ('\u{1D6D6}', "<font> 03C5"),
    ('\u{1D6D7}', "<font> 03C6"),
    ('\u{1D6D8}', "<font> 03C7"),
    ('\u{1D6D9}', "<font> 03C8"),
    ('\u{1D6DA}', "<font> 03C9"),
    ('\u{1D6DB}', "<font> 2202"),
    ('\u{1D6DC}', "<font> 03F5"),
    ('\u{1D6DD}', "<font> 03D1"),
    ('\u{1D6DE}', "<font> 03F0"),
    ('\u{1D6DF}', "<font> 03D5"),
    ('\u{1D6E0}', "<font> 03F1"),
    ('\u{1D6E1}', "<font> 03D6"),
    ('\u{1D6E2}', "<font> 0391"),
    ('\u{1D6E3}', "<font> 0392"),
    ('\u{1D6E4}', "<font> 0393"),
    ('\u{1D6E5}', "<font> 0394"),
    ('\u{1D6E6}', "<font> 0395"),
    ('\u{1D6E7}', "<font> 0396"),
    ('\u{1D6E8}', "<font> 0397"),
    ('\u{1D6E9}', "<font> 0398"),
    ('\u{1D6EA}', "<font> 0399"),
    ('\u{1D6EB}', "<font> 039A"),
    ('\u{1D6EC}', "<font> 039B"),
    ('\u{1D6ED}', "<font> 039C"),
    ('\u{1D6EE}', "<font> 039D"),
    ('\u{1D6EF}', "<font> 039E"),
    ('\u{1D6F0}', "<font> 039F"),
    ('\u{1D6F1}', "<font> 03A0"),
    ('\u{1D6F2}', "<font> 03A1"),
    ('\u{1D6F3}', "<font> 03F4"),
    ('\u{1D6F4}', "<font> 03A3"),
    ('\u{1D6F5}', "<font> 03A4"),
    ('\u{1D6F6}', "<font> 03A5"),
    ('\u{1D6F7}', "<font> 03A6"),
    ('\u{1D6F8}', "<font> 03A7"),
    ('\u{1D6F9}', "<font> 03A8"),
    ('\u{1D6FA}', "<font> 03A9"),
    ('\u{1D6FB}', "<font> 2207"),
    ('\u{1D6FC}', "<font> 03B1"),
    ('\u{1D6FD}', "<font> 03B2"),
    ('\u{1D6FE}', "<font> 03B3"),
    ('\u{1D6FF}', "<font> 03B4"),
    ('\u{1D700}', "<font> 03B5"),
    ('\u{1D701}', "<font> 03B6"),
    ('\u{1D702}', "<font> 03B7"),
    ('\u{1D703}', "<font> 03B8"),
    ('\u{1D704}', "<font> 03B9"),
    ('\u{1D705}', "<font> 03BA"),
    ('\u{1D706}', "<font> 03BB"),
    ('\u{1D707}', "<font> 03BC"),
    ('\u{1D708}', "<font> 03BD"),
    ('\u{1D709}', "<font> 03BE"),
    ('\u{1D70A}', "<font> 03BF"),
    ('\u{1D70B}', "<font> 03C0"),
    ('\u{1D70C}', "<font> 03C1"),
    ('\u{1D70D}', "<font> 03C2"),
    ('\u{1D70E}', "<font> 03C3"),
    ('\u{1D70F}', "<font> 03C4"),
    ('\u{1D710}', "<font> 03C5"),
    ('\u{1D711}', "<font> 03C6"),
    ('\u{1D712}', "<font> 03C7"),
    ('\u{1D713}', "<font> 03C8"),
    ('\u{1D714}', "<font> 03C9"),
    ('\u{1D715}', "<font> 2202"),
    ('\u{1D716}', "<font> 03F5"),
    ('\u{1D717}', "<font> 03D1"),
    ('\u{1D718}', "<font> 03F0"),
    ('\u{1D719}', "<font> 03D5"),
    ('\u{1D71A}', "<font> 03F1"),
    ('\u{1D71B}', "<font> 03D6"),
    ('\u{1D71C}', "<font> 0391"),
    ('\u{1D71D}', "<font> 0392"),
    ('\u{1D71E}', "<font> 0393"),
    ('\u{1D71F}', "<font> 0394"),
    ('\u{1D720}', "<font> 0395"),
    ('\u{1D721}', "<font> 0396"),
    ('\u{1D722}', "<font> 0397"),
    ('\u{1D723}', "<font> 0398"),
    ('\u{1D724}', "<font> 0399"),
    ('\u{1D725}', "<font> 039A"),
    ('\u{1D726}', "<font> 039B"),
    ('\u{1D727}', "<font> 039C"),
    ('\u{1D728}', "<font> 039D"),
    ('\u{1D729}', "<font> 039E"),
    ('\u{1D72A}', "<font> 039F"),
    ('\u{1D72B}', "<font> 03A0"),
    ('\u{1D72C}', "<font> 03A1"),
    ('\u{1D72D}', "<font> 03F4"),
    ('\u{1D72E}', "<font> 03A3"),
    ('\u{1D72F}', "<font> 03A4"),
    ('\u{1D730}', "<font> 03A5"),
    ('\u{1D731}', "<font> 03A6"),
    ('\u{1D732}', "<font> 03A7"),
    ('\u{1D733}', "<font> 03A8"),
    ('\u{1D734}', "<font> 03A9"),
    ('\u{1D735}', "<font> 2207"),
    ('\u{1D736}', "<font> 03B1"),
    ('\u{1D737}', "<font> 03B2"),
    ('\u{1D738}', "<font> 03B3"),
    ('\u{1D739}', "<font> 03B4"),
    ('\u{1D73A}', "<font> 03B5"),
    ('\u{1D73B}', "<font> 03B6"),
    ('\u{1D73C}', "<font> 03B7"),
    ('\u{1D73D}', "<font> 03B8"),
    ('\u{1D73E}', "<font> 03B9"),
    ('\u{1D73F}', "<font> 03BA"),
    ('\u{1D740}', "<font> 03BB"),
    ('\u{1D741}', "<font> 03BC"),
    ('\u{1D742}', "<font> 03BD"),
    ('\u{1D743}', "<font> 03BE"),
    ('\u{1D744}', "<font> 03BF"),
    ('\u{1D745}', "<font> 03C0"),
    ('\u{1D746}', "<font> 03C1"),
    ('\u{1D747}', "<font> 03C2"),
    ('\u{1D748}', "<font> 03C3"),
    ('\u{1D749}', "<font> 03C4"),
    ('\u{1D74A}', "<font> 03C5"),
    ('\u{1D74B}', "<font> 03C6"),
    ('\u{1D74C}', "<font> 03C7"),
    ('\u{1D74D}', "<font> 03C8"),
    ('\u{1D74E}', "<font> 03C9"),
    ('\u{1D74F}', "<font> 2202"),
    ('\u{1D750}', "<font> 03F5"),
    ('\u{1D751}', "<font> 03D1"),
    ('\u{1D752}', "<font> 03F0"),
    ('\u{1D753}', "<font> 03D5"),
    ('\u{1D754}', "<font> 03F1"),
    ('\u{1D755}', "<font> 03D6"),
    ('\u{1D756}', "<font> 0391"),
    ('\u{1D757}', "<font> 0392"),
    ('\u{1D758}', "<font> 0393"),
    ('\u{1D759}', "<font> 0394"),
    ('\u{1D75A}', "<font> 0395"),
    ('\u{1D75B}', "<font> 0396"),
    ('\u{1D75C}', "<font> 0397"),
    ('\u{1D75D}', "<font> 0398"),
    ('\u{1D75E}', "<font> 0399"),
    ('\u{1D75F}', "<font> 039A"),
    ('\u{1D760}', "<font> 039B"),
    ('\u{1D761}', "<font> 039C"),
    ('\u{1D762}', "<font> 039D"),
    ('\u{1D763}', "<font> 039E"),
    ('\u{1D764}', "<font> 039F"),
    ('\u{1D765}', "<font> 03A0"),
    ('\u{1D766}', "<font> 03A1"),
    ('\u{1D767}', "<font> 03F4"),
    ('\u{1D768}', "<font> 03A3"),
    ('\u{1D769}', "<font> 03A4"),
    ('\u{1D76A}', "<font> 03A5"),
    ('\u{1D76B}', "<font> 03A6"),
    ('\u{1D76C}', "<font> 03A7"),
    ('\u{1D76D}', "<font> 03A8"),
    ('\u{1D76E}', "<font> 03A9"),
    ('\u{1D76F}', "<font> 2207"),
    ('\u{1D770}', "<font> 03B1"),
    ('\u{1D771}', "<font> 03B2"),
    ('\u{1D772}', "<font> 03B3"),
    ('\u{1D773}', "<font> 03B4"),
    ('\u{1D774}', "<font> 03B5"),
    ('\u{1D775}', "<font> 03B6"),
    ('\u{1D776}', "<font> 03B7"),
    ('\u{1D777}', "<font> 03B8"),
    ('\u{1D778}', "<font> 03B9"),
    ('\u{1D779}', "<font> 03BA"),
    ('\u{1D77A}', "<font> 03BB"),
    ('\u{1D77B}', "<font> 03BC"),
    ('\u{1D77C}', "<font> 03BD"),
    ('\u{1D77D}', "<font> 03BE"),
    ('\u{1D77E}', "<font> 03BF"),
    ('\u{1D77F}', "<font> 03C0"),
    ('\u{1D780}', "<font> 03C1"),
    ('\u{1D781}', "<font> 03C2"),
    ('\u{1D782}', "<font> 03C3"),
    ('\u{1D783}', "<font> 03C4"),
    ('\u{1D784}', "<font> 03C5"),
    ('\u{1D785}', "<font> 03C6"),
    ('\u{1D786}', "<font> 03C7"),
    ('\u{1D787}', "<font> 03C8"),
    ('\u{1D788}', "<font> 03C9"),
    ('\u{1D789}', "<font> 2202"),
    ('\u{1D78A}', "<font> 03F5"),
    ('\u{1D78B}', "<font> 03D1"),
    ('\u{1D78C}', "<font> 03F0"),
    ('\u{1D78D}', "<font> 03D5"),
    ('\u{1D78E}', "<font> 03F1"),
    ('\u{1D78F}', "<font> 03D6"),
    ('\u{1D790}', "<font> 0391"),
    ('\u{1D791}', "<font> 0392"),
    ('\u{1D792}', "<font> 0393"),
    ('\u{1D793}', "<font> 0394"),
    ('\u{1D794}', "<font> 0395"),
    ('\u{1D795}', "<font> 0396"),
    ('\u{1D796}', "<font> 0397"),
    ('\u{1D797}', "<font> 0398"),
    ('\u{1D798}', "<font> 0399"),
    ('\u{1D799}', "<font> 039A"),
    ('\u{1D79A}', "<font> 039B"),
    ('\u{1D79B}', "<font> 039C"),
    ('\u{1D79C}', "<font> 039D"),
    ('\u{1D79D}', "<font> 039E"),
    ('\u{1D79E}', "<font> 039F"),
    ('\u{1D79F}', "<font> 03A0"),
    ('\u{1D7A0}', "<font> 03A1"),
    ('\u{1D7A1}', "<font> 03F4"),
    ('\u{1D7A2}', "<font> 03A3"),
    ('\u{1D7A3}', "<font> 03A4"),
    ('\u{1D7A4}', "<font> 03A5"),
    ('\u{1D7A5}', "<font> 03A6"),
    ('\u{1D7A6}', "<font> 03A7"),
    ('\u{1D7A7}', "<font> 03A8"),
    ('\u{1D7A8}', "<font> 03A9"),
    ('\u{1D7A9}', "<font> 2207"),
    ('\u{1D7AA}', "<font> 03B1"),
    ('\u{1D7AB}', "<font> 03B2"),
    ('\u{1D7AC}', "<font> 03B3"),
    ('\u{1D7AD}', "<font> 03B4"),
    ('\u{1D7AE}', "<font> 03B5"),
    ('\u{1D7AF}', "<font> 03B6"),
    ('\u{1D7B0}', "<font> 03B7"),
    ('\u{1D7B1}', "<font> 03B8"),
    ('\u{1D7B2}', "<font> 03B9"),
    ('\u{1D7B3}', "<font> 03BA"),
    ('\u{1D7B4}', "<font> 03BB"),
    ('\u{1D7B5}', "<font> 03BC"),
    ('\u{1D7B6}', "<font> 03BD"),
    ('\u{1D7B7}', "<font> 03BE"),
    ('\u{1D7B8}', "<font> 03BF"),
    ('\u{1D7B9}', "<font> 03C0"),
    ('\u{1D7BA}', "<font> 03C1"),
    ('\u{1D7BB}', "<font> 03C2"),
    ('\u{1D7BC}', "<font> 03C3"),
    ('\u{1D7BD}', "<font> 03C4"),
    ('\u{1D7BE}', "<font> 03C5"),
    ('\u{1D7BF}', "<font> 03C6"),
    ('\u{1D7C0}', "<font> 03C7"),
    ('\u{1D7C1}', "<font> 03C8"),
    ('\u{1D7C2}', "<font> 03C9"),
    ('\u{1D7C3}', "<font> 2202"),
    ('\u{1D7C4}', "<font> 03F5"),
    ('\u{1D7C5}', "<font> 03D1"),
    ('\u{1D7C6}', "<font> 03F0"),
    ('\u{1D7C7}', "<font> 03D5"),
    ('\u{1D7C8}', "<font> 03F1"),
    ('\u{1D7C9}', "<font> 03D6"),
    ('\u{1D7CA}', "<font> 03DC"),
    ('\u{1D7CB}', "<font> 03DD"),
    ('\u{1D7CE}', "<font> 0030"),
    ('\u{1D7CF}', "<font> 0031"),
    ('\u{1D7D0}', "<font> 0032"),
    ('\u{1D7D1}', "<font> 0033"),
    ('\u{1D7D2}', "<font> 0034"),
    ('\u{1D7D3}', "<font> 0035"),
    ('\u{1D7D4}', "<font> 0036"),
    ('\u{1D7D5}', "<font> 0037"),
    ('\u{1D7D6}', "<font> 0038"),
    ('\u{1D7D7}', "<font> 0039"),
    ('\u{1D7D8}', "<font> 0030"),
    ('\u{1D7D9}', "<font> 0031"),
    ('\u{1D7DA}', "<font> 0032"),
    ('\u{1D7DB}', "<font> 0033"),
    ('\u{1D7DC}', "<font> 0034"),
    ('\u{1D7DD}', "<font> 0035"),
    ('\u{1D7DE}', "<font> 0036"),
    ('\u{1D7DF}', "<font> 0037"),
    ('\u{1D7E0}', "<font> 0038"),
    ('\u{1D7E1}', "<font> 0039"),
    ('\u{1D7E2}', "<font> 0030"),
    ('\u{1D7E3}', "<font> 0031"),
    ('\u{1D7E4}', "<font> 0032"),
    ('\u{1D7E5}', "<font> 0033"),
    ('\u{1D7E6}', "<font> 0034"),
    ('\u{1D7E7}', "<font> 0035"),
    ('\u{1D7E8}', "<font> 0036"),
    ('\u{1D7E9}', "<font> 0037"),
    ('\u{1D7EA}', "<font> 0038"),
    ('\u{1D7EB}', "<font> 0039"),
    ('\u{1D7EC}', "<font> 0030"),
    ('\u{1D7ED}', "<font> 0031"),
    ('\u{1D7EE}', "<font> 0032"),
    ('\u{1D7EF}', "<font> 0033"),
    ('\u{1D7F0}', "<font> 0034"),
    ('\u{1D7F1}', "<font> 0035"),
    ('\u{1D7F2}', "<font> 0036"),
    ('\u{1D7F3}', "<font> 0037"),
    ('\u{1D7F4}', "<font> 0038"),
    ('\u{1D7F5}', "<font> 0039"),
    ('\u{1D7F6}', "<font> 0030"),
    ('\u{1D7F7}', "<font> 0031"),
    ('\u{1D7F8}', "<font> 0032"),
    ('\u{1D7F9}', "<font> 0033"),
    ('\u{1D7FA}', "<font> 0034"),
    ('\u{1D7FB}', "<font> 0035"),
    ('\u{1D7FC}', "<font> 0036"),
    ('\u{1D7FD}', "<font> 0037"),
    ('\u{1D7FE}', "<font> 0038"),
    ('\u{1D7FF}', "<font> 0039"),
    ('\u{1EE00}', "<font> 0627"),
    ('\u{1EE01}', "<font> 0628"),
    ('\u{1EE02}', "<font> 062C"),
    ('\u{1EE03}', "<font> 062F"),
    ('\u{1EE05}', "<font> 0648"),
    ('\u{1EE06}', "<font> 0632"),
    ('\u{1EE07}', "<font> 062D"),
    ('\u{1EE08}', "<font> 0637"),
    ('\u{1EE09}', "<font> 064A"),
    ('\u{1EE0A}', "<font> 0643"),
    ('\u{1EE0B}', "<font> 0644"),
    ('\u{1EE0C}', "<font> 0645"),
    ('\u{1EE0D}', "<font> 0646"),
    ('\u{1EE0E}', "<font> 0633"),
    ('\u{1EE0F}', "<font> 0639"),
    ('\u{1EE10}', "<font> 0641"),
    ('\u{1EE11}', "<font> 0635"),
    ('\u{1EE12}', "<font> 0642"),
    ('\u{1EE13}', "<font> 0631"),
    ('\u{1EE14}', "<font> 0634"),
    ('\u{1EE15}', "<font> 062A"),
    ('\u{1EE16}', "<font> 062B"),
    ('\u{1EE17}', "<font> 062E"),
    ('\u{1EE18}', "<font> 0630"),
    ('\u{1EE19}', "<font> 0636"),
    ('\u{1EE1A}', "<font> 0638"),
    ('\u{1EE1B}', "<font> 063A"),
    ('\u{1EE1C}', "<font> 066E"),
    ('\u{1EE1D}', "<font> 06BA"),
    ('\u{1EE1E}', "<font> 06A1"),
    ('\u{1EE1F}', "<font> 066F"),
    ('\u{1EE21}', "<font> 0628"),
    ('\u{1EE22}', "<font> 062C"),
    ('\u{1EE24}', "<font> 0647"),
    ('\u{1EE27}', "<font> 062D"),
    ('\u{1EE29}', "<font> 064A"),
    ('\u{1EE2A}', "<font> 0643"),
    ('\u{1EE2B}', "<font> 0644"),
    ('\u{1EE2C}', "<font> 0645"),
    ('\u{1EE2D}', "<font> 0646"),
    ('\u{1EE2E}', "<font> 0633"),
    ('\u{1EE2F}', "<font> 0639"),
    ('\u{1EE30}', "<font> 0641"),
    ('\u{1EE31}', "<font> 0635"),
    ('\u{1EE32}', "<font> 0642"),
    ('\u{1EE34}', "<font> 0634"),
    ('\u{1EE35}', "<font> 062A"),
    ('\u{1EE36}', "<font> 062B"),
    ('\u{1EE37}', "<font> 062E"),
    ('\u{1EE39}', "<font> 0636"),
    ('\u{1EE3B}', "<font> 063A"),
    ('\u{1EE42}', "<font> 062C"),
    ('\u{1EE47}', "<font> 062D"),
    ('\u{1EE49}', "<font> 064A"),
    ('\u{1EE4B}', "<font> 0644"),
    ('\u{1EE4D}', "<font> 0646"),
    ('\u{1EE4E}', "<font> 0633"),
    ('\u{1EE4F}', "<font> 0639"),
    ('\u{1EE51}', "<font> 0635"),
    ('\u{1EE52}', "<font> 0642"),
    ('\u{1EE54}', "<font> 0634"),
    ('\u{1EE57}', "<font> 062E"),
    ('\u{1EE59}', "<font> 0636"),
    ('\u{1EE5B}', "<font> 063A"),
    ('\u{1EE5D}', "<font> 06BA"),
    ('\u{1EE5F}', "<font> 066F"),
    ('\u{1EE61}', "<font> 0628"),
    ('\u{1EE62}', "<font> 062C"),
    ('\u{1EE64}', "<font> 0647"),
    ('\u{1EE67}', "<font> 062D"),
    ('\u{1EE68}', "<font> 0637"),
    ('\u{1EE69}', "<font> 064A"),
    ('\u{1EE6A}', "<font> 0643"),
    ('\u{1EE6C}', "<font> 0645"),
    ('\u{1EE6D}', "<font> 0646"),
    ('\u{1EE6E}', "<font> 0633"),
    ('\u{1EE6F}', "<font> 0639"),
    ('\u{1EE70}', "<font> 0641"),
    ('\u{1EE71}', "<font> 0635"),
    ('\u{1EE72}', "<font> 0642"),
    ('\u{1EE74}', "<font> 0634"),
    ('\u{1EE75}', "<font> 062A"),
    ('\u{1EE76}', "<font> 062B"),
    ('\u{1EE77}', "<font> 062E"),
    ('\u{1EE79}', "<font> 0636"),
    ('\u{1EE7A}', "<font> 0638"),
    ('\u{1EE7B}', "<font> 063A"),
    ('\u{1EE7C}', "<font> 066E"),
    ('\u{1EE7E}', "<font> 06A1"),
    ('\u{1EE80}', "<font> 0627"),
    ('\u{1EE81}', "<font> 0628"),
    ('\u{1EE82}', "<font> 062C"),
    ('\u{1EE83}', "<font> 062F"),
    ('\u{1EE84}', "<font> 0647"),
    ('\u{1EE85}', "<font> 0648"),
    ('\u{1EE86}', "<font> 0632"),
    ('\u{1EE87}', "<font> 062D"),
    ('\u{1EE88}', "<font> 0637"),
    ('\u{1EE89}', "<font> 064A"),
    ('\u{1EE8B}', "<font> 0644"),
    ('\u{1EE8C}', "<font> 0645"),
    ('\u{1EE8D}', "<font> 0646"),
    ('\u{1EE8E}', "<font> 0633"),
    ('\u{1EE8F}', "<font> 0639"),
    ('\u{1EE90}', "<font> 0641"),
    ('\u{1EE91}', "<font> 0635"),
    ('\u{1EE92}', "<font> 0642"),
    ('\u{1EE93}', "<font> 0631"),
    ('\u{1EE94}', "<font> 0634"),
    ('\u{1EE95}', "<font> 062A"),
    ('\u{1EE96}', "<font> 062B"),
    ('\u{1EE97}', "<font> 062E"),
    ('\u{1EE98}', "<font> 0630"),
    ('\u{1EE99}', "<font> 0636"),
    ('\u{1EE9A}', "<font> 0638"),
    ('\u{1EE9B}', "<font> 063A"),
    ('\u{1EEA1}', "<font> 0628"),
    ('\u{1EEA2}', "<font> 062C"),
    ('\u{1EEA3}', "<font> 062F"),
    ('\u{1EEA5}', "<font> 0648"),
    ('\u{1EEA6}', "<font> 0632"),
    ('\u{1EEA7}', "<font> 062D"),
    ('\u{1EEA8}', "<font> 0637"),
    ('\u{1EEA9}', "<font> 064A"),
    ('\u{1EEAB}', "<font> 0644"),
    ('\u{1EEAC}', "<font> 0645"),
    ('\u{1EEAD}', "<font> 0646"),
    ('\u{1EEAE}', "<font> 0633"),
    ('\u{1EEAF}', "<font> 0639"),
    ('\u{1EEB0}', "<font> 0641"),
    ('\u{1EEB1}', "<font> 0635"),
    ('\u{1EEB2}', "<font> 0642"),
    ('\u{1EEB3}', "<font> 0631"),
    ('\u{1EEB4}', "<font> 0634"),
    ('\u{1EEB5}', "<font> 062A"),
    ('\u{1EEB6}', "<font> 062B"),
    ('\u{1EEB7}', "<font> 062E"),
    ('\u{1EEB8}', "<font> 0630"),
    ('\u{1EEB9}', "<font> 0636"),
    ('\u{1EEBA}', "<font> 0638"),
    ('\u{1EEBB}', "<font> 063A"),
    ('\u{1F100}', "<compat> 0030 002E"),
    ('\u{1F101}', "<compat> 0030 002C"),
    ('\u{1F102}', "<compat> 0031 002C"),
    ('\u{1F103}', "<compat> 0032 002C"),
    ('\u{1F104}', "<compat> 0033 002C"),
    ('\u{1F105}', "<compat> 0034 002C"),
    ('\u{1F106}', "<compat> 0035 002C"),
    ('\u{1F107}', "<compat> 0036 002C"),
    ('\u{1F108}', "<compat> 0037 002C"),
    ('\u{1F109}', "<compat> 0038 002C"),
    ('\u{1F10A}', "<compat> 0039 002C"),
    ('\u{1F110}', "<compat> 0028 0041 0029"),
    ('\u{1F111}', "<compat> 0028 0042 0029"),
    ('\u{1F112}', "<compat> 0028 0043 0029"),
    ('\u{1F113}', "<compat> 0028 0044 0029"),
    ('\u{1F114}', "<compat> 0028 0045 0029"),
    ('\u{1F115}', "<compat> 0028 0046 0029"),
    ('\u{1F116}', "<compat> 0028 0047 0029"),
    ('\u{1F117}', "<compat> 0028 0048 0029"),
    ('\u{1F118}', "<compat> 0028 0049 0029"),
    ('\u{1F119}', "<compat> 0028 004A 0029"),
    ('\u{1F11A}', "<compat> 0028 004B 0029"),
    ('\u{1F11B}', "<compat> 0028 004C 0029"),
    ('\u{1F11C}', "<compat> 0028 004D 0029"),
    ('\u{1F11D}', "<compat> 0028 004E 0029"),
    ('\u{1F11E}', "<compat> 0028 004F 0029"),
    ('\u{1F11F}', "<compat> 0028 0050 0029"),
    ('\u{1F120}', "<compat> 0028 0051 0029"),
    ('\u{1F121}', "<compat> 0028 0052 0029"),
    ('\u{1F122}', "<compat> 0028 0053 0029"),
    ('\u{1F123}', "<compat> 0028 0054 0029"),
    ('\u{1F124}', "<compat> 0028 0055 0029"),
    ('\u{1F125}', "<compat> 0028 0056 0029"),
    ('\u{1F126}', "<compat> 0028 0057 0029"),
    ('\u{1F127}', "<compat> 0028 0058 0029"),
    ('\u{1F128}', "<compat> 0028 0059 0029"),
    ('\u{1F129}', "<compat> 0028 005A 0029"),
    ('\u{1F12A}', "<compat> 3014 0053 3015"),
    ('\u{1F12B}', "<circle> 0043"),
    ('\u{1F12C}', "<circle> 0052"),
    ('\u{1F12D}', "<circle> 0043 0044"),
    ('\u{1F12E}', "<circle> 0057 005A"),
    ('\u{1F130}', "<square> 0041"),
    ('\u{1F131}', "<square> 0042"),
    ('\u{1F132}', "<square> 0043"),
    ('\u{1F133}', "<square> 0044"),
    ('\u{1F134}', "<square> 0045"),
    ('\u{1F135}', "<square> 0046"),
    ('\u{1F136}', "<square> 0047"),
    ('\u{1F137}', "<square> 0048"),
    ('\u{1F138}', "<square> 0049"),
    ('\u{1F139}', "<square> 004A"),
    ('\u{1F13A}', "<square> 004B"),
    ('\u{1F13B}', "<square> 004C"),
    ('\u{1F13C}', "<square> 004D"),
    ('\u{1F13D}', "<square> 004E"),
    ('\u{1F13E}', "<square> 004F"),
    ('\u{1F13F}', "<square> 0050"),
    ('\u{1F140}', "<square> 0051"),
    ('\u{1F141}', "<square> 0052"),
    ('\u{1F142}', "<square> 0053"),
    ('\u{1F143}', "<square> 0054"),
    ('\u{1F144}', "<square> 0055"),
    ('\u{1F145}', "<square> 0056"),
    ('\u{1F146}', "<square> 0057"),
    ('\u{1F147}', "<square> 0058"),
    ('\u{1F148}', "<square> 0059"),
    ('\u{1F149}', "<square> 005A"),
    ('\u{1F14A}', "<square> 0048 0056"),
    ('\u{1F14B}', "<square> 004D 0056"),
    ('\u{1F14C}', "<square> 0053 0044"),
    ('\u{1F14D}', "<square> 0053 0053"),
    ('\u{1F14E}', "<square> 0050 0050 0056"),
    ('\u{1F14F}', "<square> 0057 0043"),
    ('\u{1F16A}', "<super> 004D 0043"),
    ('\u{1F16B}', "<super> 004D 0044"),
    ('\u{1F16C}', "<super> 004D 0052"),
    ('\u{1F190}', "<square> 0044 004A"),
    ('\u{1F200}', "<square> 307B 304B"),
    ('\u{1F201}', "<square> 30B3 30B3"),
    ('\u{1F202}', "<square> 30B5"),
    ('\u{1F210}', "<square> 624B"),
    ('\u{1F211}', "<square> 5B57"),
    ('\u{1F212}', "<square> 53CC"),
    ('\u{1F213}', "<square> 30C7"),
    ('\u{1F214}', "<square> 4E8C"),
    ('\u{1F215}', "<square> 591A"),
    ('\u{1F216}', "<square> 89E3"),
    ('\u{1F217}', "<square> 5929"),
    ('\u{1F218}', "<square> 4EA4"),
    ('\u{1F219}', "<square> 6620"),
    ('\u{1F21A}', "<square> 7121"),
    ('\u{1F21B}', "<square> 6599"),
    ('\u{1F21C}', "<square> 524D"),
    ('\u{1F21D}', "<square> 5F8C"),
    ('\u{1F21E}', "<square> 518D"),
    ('\u{1F21F}', "<square> 65B0"),
    ('\u{1F220}', "<square> 521D"),
    ('\u{1F221}', "<square> 7D42"),
    ('\u{1F222}', "<square> 751F"),
    ('\u{1F223}', "<square> 8CA9"),
    ('\u{1F224}', "<square> 58F0"),
    ('\u{1F225}', "<square> 5439"),
    ('\u{1F226}', "<square> 6F14"),
    ('\u{1F227}', "<square> 6295"),
    ('\u{1F228}', "<square> 6355"),
    ('\u{1F229}', "<square> 4E00"),
    ('\u{1F22A}', "<square> 4E09"),
    ('\u{1F22B}', "<square> 904A"),
    ('\u{1F22C}', "<square> 5DE6"),
    ('\u{1F22D}', "<square> 4E2D"),
    ('\u{1F22E}', "<square> 53F3"),
    ('\u{1F22F}', "<square> 6307"),
    ('\u{1F230}', "<square> 8D70"),
    ('\u{1F231}', "<square> 6253"),
    ('\u{1F232}', "<square> 7981"),
    ('\u{1F233}', "<square> 7A7A"),
    ('\u{1F234}', "<square> 5408"),
    ('\u{1F235}', "<square> 6E80"),
    ('\u{1F236}', "<square> 6709"),
    ('\u{1F237}', "<square> 6708"),
    ('\u{1F238}', "<square> 7533"),
    ('\u{1F239}', "<square> 5272"),
    ('\u{1F23A}', "<square> 55B6"),
    ('\u{1F23B}', "<square> 914D"),
    ('\u{1F240}', "<compat> 3014 672C 3015"),
    ('\u{1F241}', "<compat> 3014 4E09 3015"),
    ('\u{1F242}', "<compat> 3014 4E8C 3015"),
    ('\u{1F243}', "<compat> 3014 5B89 3015"),
    ('\u{1F244}', "<compat> 3014 70B9 3015"),
    ('\u{1F245}', "<compat> 3014 6253 3015"),
    ('\u{1F246}', "<compat> 3014 76D7 3015"),
    ('\u{1F247}', "<compat> 3014 52DD 3015"),
    ('\u{1F248}', "<compat> 3014 6557 3015"),
    ('\u{1F250}', "<circle> 5F97"),
    ('\u{1F251}', "<circle> 53EF"),
    ('\u{1FBF0}', "<font> 0030"),
    ('\u{1FBF1}', "<font> 0031"),
    ('\u{1FBF2}', "<font> 0032"),
    ('\u{1FBF3}', "<font> 0033"),
    ('\u{1FBF4}', "<font> 0034"),
    ('\u{1FBF5}', "<font> 0035"),
    ('\u{1FBF6}', "<font> 0036"),
    ('\u{1FBF7}', "<font> 0037"),
    ('\u{1FBF8}', "<font> 0038"),
    ('\u{1FBF9}', "<font> 0039"),
    ('\u{2F800}', "4E3D"),
    ('\u{2F801}', "4E38"),
    ('\u{2F802}', "4E41"),
    ('\u{2F803}', "20122"),
    ('\u{2F804}', "4F60"),
    ('\u{2F805}', "4FAE"),
    ('\u{2F806}', "4FBB"),
    ('\u{2F807}', "5002"),
    ('\u{2F808}', "507A"),
    ('\u{2F809}', "5099"),
    ('\u{2F80A}', "50E7"),
    ('\u{2F80B}', "50CF"),
    ('\u{2F80C}', "349E"),
    ('\u{2F80D}', "2063A"),
    ('\u{2F80E}', "514D"),
    ('\u{2F80F}', "5154"),
    ('\u{2F810}', "5164"),
    ('\u{2F811}', "5177"),
    ('\u{2F812}', "2051C"),
    ('\u{2F813}', "34B9"),
    ('\u{2F814}', "5167"),
    ('\u{2F815}', "518D"),
    ('\u{2F816}', "2054B"),
    ('\u{2F817}', "5197"),
    ('\u{2F818}', "51A4"),
    ('\u{2F819}', "4ECC"),
    ('\u{2F81A}', "51AC"),
    ('\u{2F81B}', "51B5"),
    ('\u{2F81C}', "291DF"),
    ('\u{2F81D}', "51F5"),
    ('\u{2F81E}', "5203"),
    ('\u{2F81F}', "34DF"),
    ('\u{2F820}', "523B"),
    ('\u{2F821}', "5246"),
    ('\u{2F822}', "5272"),
    ('\u{2F823}', "5277"),
    ('\u{2F824}', "3515"),
    ('\u{2F825}', "52C7"),
    ('\u{2F826}', "52C9"),
    ('\u{2F827}', "52E4"),
    ('\u{2F828}', "52FA"),
    ('\u{2F829}', "5305"),
    ('\u{2F82A}', "5306"),
    ('\u{2F82B}', "5317"),
    ('\u{2F82C}', "5349"),
    ('\u{2F82D}', "5351"),
    ('\u{2F82E}', "535A"),
    ('\u{2F82F}', "5373"),
    ('\u{2F830}', "537D"),
    ('\u{2F831}', "537F"),
    ('\u{2F832}', "537F"),
    ('\u{2F833}', "537F"),
    ('\u{2F834}', "20A2C"),
    ('\u{2F835}', "7070"),
    ('\u{2F836}', "53CA"),
    ('\u{2F837}', "53DF"),
    ('\u{2F838}', "20B63"),
    ('\u{2F839}', "53EB"),
    ('\u{2F83A}', "53F1"),
    ('\u{2F83B}', "5406"),
    ('\u{2F83C}', "549E"),
    ('\u{2F83D}', "5438"),
    ('\u{2F83E}', "5448"),
    ('\u{2F83F}', "5468"),
    ('\u{2F840}', "54A2"),
    ('\u{2F841}', "54F6"),
    ('\u{2F842}', "5510"),
    ('\u{2F843}', "5553"),
    ('\u{2F844}', "5563"),
    ('\u{2F845}', "5584"),
    ('\u{2F846}', "5584"),
    ('\u{2F847}', "5599"),
    ('\u{2F848}', "55AB"),
    ('\u{2F849}', "55B3"),
    ('\u{2F84A}', "55C2"),
    ('\u{2F84B}', "5716"),
    ('\u{2F84C}', "5606"),
    ('\u{2F84D}', "5717"),
    ('\u{2F84E}', "5651"),
    ('\u{2F84F}', "5674"),
    ('\u{2F850}', "5207"),
    ('\u{2F851}', "58EE"),
    ('\u{2F852}', "57CE"),
    ('\u{2F853}', "57F4"),
    ('\u{2F854}', "580D"),
    ('\u{2F855}', "578B"),
    ('\u{2F856}', "5832"),
    ('\u{2F857}', "5831"),
    ('\u{2F858}', "58AC"),
    ('\u{2F859}', "214E4"),
    ('\u{2F85A}', "58F2"),
    ('\u{2F85B}', "58F7"),
    ('\u{2F85C}', "5906"),
    ('\u{2F85D}', "591A"),
    ('\u{2F85E}', "5922"),
    ('\u{2F85F}', "5962"),
    ('\u{2F860}', "216A8"),
    ('\u{2F861}', "216EA"),
    ('\u{2F862}', "59EC"),
    ('\u{2F863}', "5A1B"),
    ('\u{2F864}', "5A27"),
    ('\u{2F865}', "59D8"),
    ('\u{2F866}', "5A66"),
    ('\u{2F867}', "36EE"),
    ('\u{2F868}', "36FC"),
    ('\u{2F869}', "5B08"),
    ('\u{2F86A}', "5B3E"),
    ('\u{2F86B}', "5B3E"),
    ('\u{2F86C}', "219C8"),
    ('\u{2F86D}', "5BC3"),
    ('\u{2F86E}', "5BD8"),
    ('\u{2F86F}', "5BE7"),
    ('\u{2F870}', "5BF3"),
    ('\u{2F871}', "21B18"),
    ('\u{2F872}', "5BFF"),
    ('\u{2F873}', "5C06"),
    ('\u{2F874}', "5F53"),
    ('\u{2F875}', "5C22"),
    ('\u{2F876}', "3781"),
    ('\u{2F877}', "5C60"),
    ('\u{2F878}', "5C6E"),
    ('\u{2F879}', "5CC0"),
    ('\u{2F87A}', "5C8D"),
    ('\u{2F87B}', "21DE4"),
    ('\u{2F87C}', "5D43"),
    ('\u{2F87D}', "21DE6"),
    ('\u{2F87E}', "5D6E"),
    ('\u{2F87F}', "5D6B"),
    ('\u{2F880}', "5D7C"),
    ('\u{2F881}', "5DE1"),
    ('\u{2F882}', "5DE2"),
    ('\u{2F883}', "382F"),
    ('\u{2F884}', "5DFD"),
    ('\u{2F885}', "5E28"),
    ('\u{2F886}', "5E3D"),
    ('\u{2F887}', "5E69"),
    ('\u{2F888}', "3862"),
    ('\u{2F889}', "22183"),
    ('\u{2F88A}', "387C"),
    ('\u{2F88B}', "5EB0"),
    ('\u{2F88C}', "5EB3"),
    ('\u{2F88D}', "5EB6"),
    ('\u{2F88E}', "5ECA"),
    ('\u{2F88F}', "2A392"),
    ('\u{2F890}', "5EFE"),
    ('\u{2F891}', "22331"),
    ('\u{2F892}', "22331"),
    ('\u{2F893}', "8201"),
    ('\u{2F894}', "5F22"),
    ('\u{2F895}', "5F22"),
    ('\u{2F896}', "38C7"),
    ('\u{2F897}', "232B8"),
    ('\u{2F898}', "261DA"),
    ('\u{2F899}', "5F62"),
    ('\u{2F89A}', "5F6B"),
    ('\u{2F89B}', "38E3"),
    ('\u{2F89C}', "5F9A"),
    ('\u{2F89D}', "5FCD"),
    ('\u{2F89E}', "5FD7"),
    ('\u{2F89F}', "5FF9"),
    ('\u{2F8A0}', "6081"),
    ('\u{2F8A1}', "393A"),
    ('\u{2F8A2}', "391C"),
    ('\u{2F8A3}', "6094"),
    ('\u{2F8A4}', "226D4"),
    ('\u{2F8A5}', "60C7"),
    ('\u{2F8A6}', "6148"),
    ('\u{2F8A7}', "614C"),
    ('\u{2F8A8}', "614E"),
    ('\u{2F8A9}', "614C"),
    ('\u{2F8AA}', "617A"),
    ('\u{2F8AB}', "618E"),
    ('\u{2F8AC}', "61B2"),
    ('\u{2F8AD}', "61A4"),
    ('\u{2F8AE}', "61AF"),
    ('\u{2F8AF}', "61DE"),
    ('\u{2F8B0}', "61F2"),
    ('\u{2F8B1}', "61F6"),
    ('\u{2F8B2}', "6210"),
    ('\u{2F8B3}', "621B"),
    ('\u{2F8B4}', "625D"),
    ('\u{2F8B5}', "62B1"),
    ('\u{2F8B6}', "62D4"),
    ('\u{2F8B7}', "6350"),
    ('\u{2F8B8}', "22B0C"),
    ('\u{2F8B9}', "633D"),
    ('\u{2F8BA}', "62FC"),
    ('\u{2F8BB}', "6368"),
    ('\u{2F8BC}', "6383"),
    ('\u{2F8BD}', "63E4"),
    ('\u{2F8BE}', "22BF1"),
    ('\u{2F8BF}', "6422"),
    ('\u{2F8C0}', "63C5"),
    ('\u{2F8C1}', "63A9"),
    ('\u{2F8C2}', "3A2E"),
    ('\u{2F8C3}', "6469"),
    ('\u{2F8C4}', "647E"),
    ('\u{2F8C5}', "649D"),
    ('\u{2F8C6}', "6477"),
    ('\u{2F8C7}', "3A6C"),
    ('\u{2F8C8}', "654F"),
    ('\u{2F8C9}', "656C"),
    ('\u{2F8CA}', "2300A"),
    ('\u{2F8CB}', "65E3"),
    ('\u{2F8CC}', "66F8"),
    ('\u{2F8CD}', "6649"),
    ('\u{2F8CE}', "3B19"),
    ('\u{2F8CF}', "6691"),
    ('\u{2F8D0}', "3B08"),
    ('\u{2F8D1}', "3AE4"),
    ('\u{2F8D2}', "5192"),
    ('\u{2F8D3}', "5195"),
    ('\u{2F8D4}', "6700"),
    ('\u{2F8D5}', "669C"),
    ('\u{2F8D6}', "80AD"),
    ('\u{2F8D7}', "43D9"),
    ('\u{2F8D8}', "6717"),
    ('\u{2F8D9}', "671B"),
    ('\u{2F8DA}', "6721"),
    ('\u{2F8DB}', "675E"),
    ('\u{2F8DC}', "6753"),
    ('\u{2F8DD}', "233C3"),
    ('\u{2F8DE}', "3B49"),
    ('\u{2F8DF}', "67FA"),
    ('\u{2F8E0}', "6785"),
    ('\u{2F8E1}', "6852"),
    ('\u{2F8E2}', "6885"),
    ('\u{2F8E3}', "2346D"),
    ('\u{2F8E4}', "688E"),
    ('\u{2F8E5}', "681F"),
    ('\u{2F8E6}', "6914"),
    ('\u{2F8E7}', "3B9D"),
    ('\u{2F8E8}', "6942"),
    ('\u{2F8E9}', "69A3"),
    ('\u{2F8EA}', "69EA"),
    ('\u{2F8EB}', "6AA8"),
    ('\u{2F8EC}', "236A3"),
    ('\u{2F8ED}', "6ADB"),
    ('\u{2F8EE}', "3C18"),
    ('\u{2F8EF}', "6B21"),
    ('\u{2F8F0}', "238A7"),
    ('\u{2F8F1}', "6B54"),
    ('\u{2F8F2}', "3C4E"),
    ('\u{2F8F3}', "6B72"),
    ('\u{2F8F4}', "6B9F"),
    ('\u{2F8F5}', "6BBA"),
    ('\u{2F8F6}', "6BBB"),
    ('\u{2F8F7}', "23A8D"),
    ('\u{2F8F8}', "21D0B"),
    ('\u{2F8F9}', "23AFA"),
    ('\u{2F8FA}', "6C4E"),
    ('\u{2F8FB}', "23CBC"),
    ('\u{2F8FC}', "6CBF"),
    ('\u{2F8FD}', "6CCD"),
    ('\u{2F8FE}', "6C67"),
    ('\u{2F8FF}', "6D16"),
    ('\u{2F900}', "6D3E"),
    ('\u{2F901}', "6D77"),
    ('\u{2F902}', "6D41"),
    ('\u{2F903}', "6D69"),
    ('\u{2F904}', "6D78"),
    ('\u{2F905}', "6D85"),
    ('\u{2F906}', "23D1E"),
    ('\u{2F907}', "6D34"),
    ('\u{2F908}', "6E2F"),
    ('\u{2F909}', "6E6E"),
    ('\u{2F90A}', "3D33"),
    ('\u{2F90B}', "6ECB"),
    ('\u{2F90C}', "6EC7"),
    ('\u{2F90D}', "23ED1"),
    ('\u{2F90E}', "6DF9"),
    ('\u{2F90F}', "6F6E"),
    ('\u{2F910}', "23F5E"),
    ('\u{2F911}', "23F8E"),
    ('\u{2F912}', "6FC6"),
    ('\u{2F913}', "7039"),
    ('\u{2F914}', "701E"),
    ('\u{2F915}', "701B"),
    ('\u{2F916}', "3D96"),
    ('\u{2F917}', "704A"),
    ('\u{2F918}', "707D"),
    ('\u{2F919}', "7077"),
    ('\u{2F91A}', "70AD"),
    ('\u{2F91B}', "20525"),
    ('\u{2F91C}', "7145"),
    ('\u{2F91D}', "24263"),
    ('\u{2F91E}', "719C"),
    ('\u{2F91F}', "243AB"),
    ('\u{2F920}', "7228"),
    ('\u{2F921}', "7235"),
    ('\u{2F922}', "7250"),
    ('\u{2F923}', "24608"),
    ('\u{2F924}', "7280"),
    ('\u{2F925}', "7295"),
    ('\u{2F926}', "24735"),
    ('\u{2F927}', "24814"),
    ('\u{2F928}', "737A"),
    ('\u{2F929}', "738B"),
    ('\u{2F92A}', "3EAC"),
    ('\u{2F92B}', "73A5"),
    ('\u{2F92C}', "3EB8"),
    ('\u{2F92D}', "3EB8"),
    ('\u{2F92E}', "7447"),
    ('\u{2F92F}', "745C"),
    ('\u{2F930}', "7471"),
    ('\u{2F931}', "7485"),
    ('\u{2F932}', "74CA"),
    ('\u{2F933}', "3F1B"),
    ('\u{2F934}', "7524"),
    ('\u{2F935}', "24C36"),
    ('\u{2F936}', "753E"),
    ('\u{2F937}', "24C92"),
    ('\u{2F938}', "7570"),
    ('\u{2F939}', "2219F"),
    ('\u{2F93A}', "7610"),
    ('\u{2F93B}', "24FA1"),
    ('\u{2F93C}', "24FB8"),
    ('\u{2F93D}', "25044"),
    ('\u{2F93E}', "3FFC"),
    ('\u{2F93F}', "4008"),
    ('\u{2F940}', "76F4"),
    ('\u{2F941}', "250F3"),
    ('\u{2F942}', "250F2"),
    ('\u{2F943}', "25119"),
    ('\u{2F944}', "25133"),
    ('\u{2F945}', "771E"),
    ('\u{2F946}', "771F"),
    ('\u{2F947}', "771F"),
    ('\u{2F948}', "774A"),
    ('\u{2F949}', "4039"),
    ('\u{2F94A}', "778B"),
    ('\u{2F94B}', "4046"),
    ('\u{2F94C}', "4096"),
    ('\u{2F94D}', "2541D"),
    ('\u{2F94E}', "784E"),
    ('\u{2F94F}', "788C"),
    ('\u{2F950}', "78CC"),
    ('\u{2F951}', "40E3"),
    ('\u{2F952}', "25626"),
    ('\u{2F953}', "7956"),
    ('\u{2F954}', "2569A"),
    ('\u{2F955}', "256C5"),
    ('\u{2F956}', "798F"),
    ('\u{2F957}', "79EB"),
    ('\u{2F958}', "412F"),
    ('\u{2F959}', "7A40"),
    ('\u{2F95A}', "7A4A"),
    ('\u{2F95B}', "7A4F"),
    ('\u{2F95C}', "2597C"),
    ('\u{2F95D}', "25AA7"),
    ('\u{2F95E}', "25AA7"),
    ('\u{2F95F}', "7AEE"),
    ('\u{2F960}', "4202"),
    ('\u{2F961}', "25BAB"),
    ('\u{2F962}', "7BC6"),
    ('\u{2F963}', "7BC9"),
    ('\u{2F964}', "4227"),
    ('\u{2F965}', "25C80"),
    ('\u{2F966}', "7CD2"),
    ('\u{2F967}', "42A0"),
    ('\u{2F968}', "7CE8"),
    ('\u{2F969}', "7CE3"),
    ('\u{2F96A}', "7D00"),
    ('\u{2F96B}', "25F86"),
    ('\u{2F96C}', "7D63"),
    ('\u{2F96D}', "4301"),
    ('\u{2F96E}', "7DC7"),
    ('\u{2F96F}', "7E02"),
    ('\u{2F970}', "7E45"),
    ('\u{2F971}', "4334"),
    ('\u{2F972}', "26228"),
    ('\u{2F973}', "26247"),
    ('\u{2F974}', "4359"),
    ('\u{2F975}', "262D9"),
    ('\u{2F976}', "7F7A"),
    ('\u{2F977}', "2633E"),
    ('\u{2F978}', "7F95"),
    ('\u{2F979}', "7FFA"),
    ('\u{2F97A}', "8005"),
    ('\u{2F97B}', "264DA"),
    ('\u{2F97C}', "26523"),
    ('\u{2F97D}', "8060"),
    ('\u{2F97E}', "265A8"),
    ('\u{2F97F}', "8070"),
    ('\u{2F980}', "2335F"),
    ('\u{2F981}', "43D5"),
    ('\u{2F982}', "80B2"),
    ('\u{2F983}', "8103"),
    ('\u{2F984}', "440B"),
    ('\u{2F985}', "813E"),
    ('\u{2F986}', "5AB5"),
    ('\u{2F987}', "267A7"),
    ('\u{2F988}', "267B5"),
    ('\u{2F989}', "23393"),
    ('\u{2F98A}', "2339C"),
    ('\u{2F98B}', "8201"),
    ('\u{2F98C}', "8204"),
    ('\u{2F98D}', "8F9E"),
    ('\u{2F98E}', "446B"),
    ('\u{2F98F}', "8291"),
    ('\u{2F990}', "828B"),
    ('\u{2F991}', "829D"),
    ('\u{2F992}', "52B3"),
    ('\u{2F993}', "82B1"),
    ('\u{2F994}', "82B3"),
    ('\u{2F995}', "82BD"),
    ('\u{2F996}', "82E6"),
    ('\u{2F997}', "26B3C"),
    ('\u{2F998}', "82E5"),
    ('\u{2F999}', "831D"),
    ('\u{2F99A}', "8363"),
    ('\u{2F99B}', "83AD"),
    ('\u{2F99C}', "8323"),
    ('\u{2F99D}', "83BD"),
    ('\u{2F99E}', "83E7"),
    ('\u{2F99F}', "8457"),
    ('\u{2F9A0}', "8353"),
    ('\u{2F9A1}', "83CA"),
    ('\u{2F9A2}', "83CC"),
    ('\u{2F9A3}', "83DC"),
    ('\u{2F9A4}', "26C36"),
    ('\u{2F9A5}', "26D6B"),
    ('\u{2F9A6}', "26CD5"),
    ('\u{2F9A7}', "452B"),
    ('\u{2F9A8}', "84F1"),
    ('\u{2F9A9}', "84F3"),
    ('\u{2F9AA}', "8516"),
    ('\u{2F9AB}', "273CA"),
    ('\u{2F9AC}', "8564"),
    ('\u{2F9AD}', "26F2C"),
    ('\u{2F9AE}', "455D"),
    ('\u{2F9AF}', "4561"),
    ('\u{2F9B0}', "26FB1"),
    ('\u{2F9B1}', "270D2"),
    ('\u{2F9B2}', "456B"),
    ('\u{2F9B3}', "8650"),
    ('\u{2F9B4}', "865C"),
    ('\u{2F9B5}', "8667"),
    ('\u{2F9B6}', "8669"),
    ('\u{2F9B7}', "86A9"),
    ('\u{2F9B8}', "8688"),
    ('\u{2F9B9}', "870E"),
    ('\u{2F9BA}', "86E2"),
    ('\u{2F9BB}', "8779"),
    ('\u{2F9BC}', "8728"),
    ('\u{2F9BD}', "876B"),
    ('\u{2F9BE}', "8786"),
    ('\u{2F9BF}', "45D7"),
    ('\u{2F9C0}', "87E1"),
    ('\u{2F9C1}', "8801"),
    ('\u{2F9C2}', "45F9"),
    ('\u{2F9C3}', "8860"),
    ('\u{2F9C4}', "8863"),
    ('\u{2F9C5}', "27667"),
    ('\u{2F9C6}', "88D7"),
    ('\u{2F9C7}', "88DE"),
    ('\u{2F9C8}', "4635"),
    ('\u{2F9C9}', "88FA"),
    ('\u{2F9CA}', "34BB"),
    ('\u{2F9CB}', "278AE"),
    ('\u{2F9CC}', "27966"),
    ('\u{2F9CD}', "46BE"),
    ('\u{2F9CE}', "46C7"),
    ('\u{2F9CF}', "8AA0"),
    ('\u{2F9D0}', "8AED"),
    ('\u{2F9D1}', "8B8A"),
    ('\u{2F9D2}', "8C55"),
    ('\u{2F9D3}', "27CA8"),
    ('\u{2F9D4}', "8CAB"),
    ('\u{2F9D5}', "8CC1"),
    ('\u{2F9D6}', "8D1B"),
    ('\u{2F9D7}', "8D77"),
    ('\u{2F9D8}', "27F2F"),
    ('\u{2F9D9}', "20804"),
    ('\u{2F9DA}', "8DCB"),
    ('\u{2F9DB}', "8DBC"),
    ('\u{2F9DC}', "8DF0"),
    ('\u{2F9DD}', "208DE"),
    ('\u{2F9DE}', "8ED4"),
    ('\u{2F9DF}', "8F38"),
    ('\u{2F9E0}', "285D2"),
    ('\u{2F9E1}', "285ED"),
    ('\u{2F9E2}', "9094"),
    ('\u{2F9E3}', "90F1"),
    ('\u{2F9E4}', "9111"),
    ('\u{2F9E5}', "2872E"),
    ('\u{2F9E6}', "911B"),
    ('\u{2F9E7}', "9238"),
    ('\u{2F9E8}', "92D7"),
    ('\u{2F9E9}', "92D8"),
    ('\u{2F9EA}', "927C"),
    ('\u{2F9EB}', "93F9"),
    ('\u{2F9EC}', "9415"),
    ('\u{2F9ED}', "28BFA"),
    ('\u{2F9EE}', "958B"),
    ('\u{2F9EF}', "4995"),
    ('\u{2F9F0}', "95B7"),
    ('\u{2F9F1}', "28D77"),
    ('\u{2F9F2}', "49E6"),
    ('\u{2F9F3}', "96C3"),
    ('\u{2F9F4}', "5DB2"),
    ('\u{2F9F5}', "9723"),
    ('\u{2F9F6}', "29145"),
    ('\u{2F9F7}', "2921A"),
    ('\u{2F9F8}', "4A6E"),
    ('\u{2F9F9}', "4A76"),
    ('\u{2F9FA}', "97E0"),
    ('\u{2F9FB}', "2940A"),
    ('\u{2F9FC}', "4AB2"),
    ('\u{2F9FD}', "29496"),
    ('\u{2F9FE}', "980B"),
    ('\u{2F9FF}', "980B"),
    ('\u{2FA00}', "9829"),
    ('\u{2FA01}', "295B6"),
    ('\u{2FA02}', "98E2"),
    ('\u{2FA03}', "4B33"),
    ('\u{2FA04}', "9929"),
    ('\u{2FA05}', "99A7"),
    ('\u{2FA06}', "99C2"),
    ('\u{2FA07}', "99FE"),
    ('\u{2FA08}', "4BCE"),
    ('\u{2FA09}', "29B30"),
    ('\u{2FA0A}', "9B12"),
    ('\u{2FA0B}', "9C40"),
    ('\u{2FA0C}', "9CFD"),
    ('\u{2FA0D}', "4CCE"),
    ('\u{2FA0E}', "4CED"),
    ('\u{2FA0F}', "9D67"),
    ('\u{2FA10}', "2A0CE"),
    ('\u{2FA11}', "4CF8"),
    ('\u{2FA12}', "2A105"),
    ('\u{2FA13}', "2A20E"),
    ('\u{2FA14}', "2A291"),
    ('\u{2FA15}', "9EBB"),
    ('\u{2FA16}', "4D56"),
    ('\u{2FA17}', "9EF9"),
    ('\u{2FA18}', "9EFE"),
    ('\u{2FA19}', "9F05"),
    ('\u{2FA1A}', "9F0F"),
    ('\u{2FA1B}', "9F16"),
    ('\u{2FA1C}', "9F3B"),
    ('\u{2FA1D}', "2A600"),
];

pub(crate) static NAMES: &[(char, &str)] = &[
    ('\u{00A8}', "DIAERESIS"),
    ('\u{00AF}', "MACRON"),
    ('\u{00B4}', "ACUTE ACCENT"),
    ('\u{00B5}', "MICRO SIGN"),
    ('\u{00B8}', "CEDILLA"),
    ('\u{0132}', "LATIN CAPITAL LIGATURE IJ"),
    ('\u{0133}', "LATIN SMALL LIGATURE IJ"),
    ('\u{013F}', "LATIN CAPITAL LETTER L WITH MIDDLE DOT"),
    ('\u{0140}', "LATIN SMALL LETTER L WITH MIDDLE DOT"),
    ('\u{0149}', "LATIN SMALL LETTER N PRECEDED BY APOSTROPHE"),
    ('\u{017F}', "LATIN SMALL LETTER LONG S"),
    ('\u{01C4}', "LATIN CAPITAL LETTER DZ WITH CARON"),
    ('\u{01C5}', "LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON"),
    ('\u{01C6}', "LATIN SMALL LETTER DZ WITH CARON"),
    ('\u{01C7}', "LATIN CAPITAL LETTER LJ"),
    ('\u{01C8}', "LATIN CAPITAL LETTER L WITH SMALL LETTER J"),
    ('\u{01C9}', "LATIN SMALL LETTER LJ"),
    ('\u{01CA}', "LATIN CAPITAL LETTER NJ"),
    ('\u{01CB}', "LATIN CAPITAL LETTER N WITH SMALL LETTER J"),
    ('\u{01CC}', "LATIN SMALL LETTER NJ"),
    ('\u{01F1}', "LATIN CAPITAL LETTER DZ"),
    ('\u{01F2}', "LATIN CAPITAL LETTER D WITH SMALL LETTER Z"),
    ('\u{01F3}', "LATIN SMALL LETTER DZ"),
    ('\u{02D8}', "BREVE"),
    ('\u{02D9}', "DOT ABOVE"),
    ('\u{02DA}', "RING ABOVE"),
    ('\u{02DB}', "OGONEK"),
    ('\u{02DC}', "SMALL TILDE"),
    ('\u{02DD}', "DOUBLE ACUTE ACCENT"),
    ('\u{0370}', "GREEK CAPITAL LETTER HETA"),
    ('\u{0371}', "GREEK SMALL LETTER HETA"),
    ('\u{0372}', "GREEK CAPITAL LETTER ARCHAIC SAMPI"),
    ('\u{0373}', "GREEK SMALL LETTER ARCHAIC SAMPI"),
    ('\u{0374}', "GREEK NUMERAL SIGN"),
    ('\u{0375}', "GREEK LOWER NUMERAL SIGN"),
    ('\u{0376}', "GREEK CAPITAL LETTER PAMPHYLIAN DIGAMMA"),
    ('\u{0377}', "GREEK SMALL LETTER PAMPHYLIAN DIGAMMA"),
    ('\u{037A}', "GREEK YPOGEGRAMMENI"),
    ('\u{037B}', "GREEK SMALL REVERSED LUNATE SIGMA SYMBOL"),
    ('\u{037C}', "GREEK SMALL DOTTED LUNATE SIGMA SYMBOL"),
    ('\u{037D}', "GREEK SMALL REVERSED DOTTED LUNATE SIGMA SYMBOL"),
    ('\u{037E}', "GREEK QUESTION MARK"),
    ('\u{037F}', "GREEK CAPITAL LETTER YOT"),
    ('\u{0384}', "GREEK TONOS"),
    ('\u{0385}', "GREEK DIALYTIKA TONOS"),
    ('\u{0386}', "GREEK CAPITAL LETTER ALPHA WITH TONOS"),
    ('\u{0387}', "GREEK ANO TELEIA"),
    ('\u{0388}', "GREEK CAPITAL LETTER EPSILON WITH TONOS"),
    ('\u{0389}', "GREEK CAPITAL LETTER ETA WITH TONOS"),
    ('\u{038A}', "GREEK CAPITAL LETTER IOTA WITH TONOS"),
    ('\u{038C}', "GREEK CAPITAL LETTER OMICRON WITH TONOS"),
    ('\u{038E}', "GREEK CAPITAL LETTER UPSILON WITH TONOS"),
    ('\u{038F}', "GREEK CAPITAL LETTER OMEGA WITH TONOS"),
    ('\u{0390}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND TONOS"),
    ('\u{0391}', "GREEK CAPITAL LETTER ALPHA"),
    ('\u{0392}', "GREEK CAPITAL LETTER BETA"),
    ('\u{0393}', "GREEK CAPITAL LETTER GAMMA"),
    ('\u{0394}', "GREEK CAPITAL LETTER DELTA"),
    ('\u{0395}', "GREEK CAPITAL LETTER EPSILON"),
    ('\u{0396}', "GREEK CAPITAL LETTER ZETA"),
    ('\u{0397}', "GREEK CAPITAL LETTER ETA"),
    ('\u{0398}', "GREEK CAPITAL LETTER THETA"),
    ('\u{0399}', "GREEK CAPITAL LETTER IOTA"),
    ('\u{039A}', "GREEK CAPITAL LETTER KAPPA"),
    ('\u{039B}', "GREEK CAPITAL LETTER LAMDA"),
    ('\u{039C}', "GREEK CAPITAL LETTER MU"),
    ('\u{039D}', "GREEK CAPITAL LETTER NU"),
    ('\u{039E}', "GREEK CAPITAL LETTER XI"),
    ('\u{039F}', "GREEK CAPITAL LETTER OMICRON"),
    ('\u{03A0}', "GREEK CAPITAL LETTER PI"),
    ('\u{03A1}', "GREEK CAPITAL LETTER RHO"),
    ('\u{03A3}', "GREEK CAPITAL LETTER SIGMA"),
    ('\u{03A4}', "GREEK CAPITAL LETTER TAU"),
    ('\u{03A5}', "GREEK CAPITAL LETTER UPSILON"),
    ('\u{03A6}', "GREEK CAPITAL LETTER PHI"),
    ('\u{03A7}', "GREEK CAPITAL LETTER CHI"),
    ('\u{03A8}', "GREEK CAPITAL LETTER PSI"),
    ('\u{03A9}', "GREEK CAPITAL LETTER OMEGA"),
    ('\u{03AA}', "GREEK CAPITAL LETTER IOTA WITH DIALYTIKA"),
    ('\u{03AB}', "GREEK CAPITAL LETTER UPSILON WITH DIALYTIKA"),
    ('\u{03AC}', "GREEK SMALL LETTER ALPHA WITH TONOS"),
    ('\u{03AD}', "GREEK SMALL LETTER EPSILON WITH TONOS"),
    ('\u{03AE}', "GREEK SMALL LETTER ETA WITH TONOS"),
    ('\u{03AF}', "GREEK SMALL LETTER IOTA WITH TONOS"),
    ('\u{03B0}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND TONOS"),
    ('\u{03B1}', "GREEK SMALL LETTER ALPHA"),
    ('\u{03B2}', "GREEK SMALL LETTER BETA"),
    ('\u{03B3}', "GREEK SMALL LETTER GAMMA"),
    ('\u{03B4}', "GREEK SMALL LETTER DELTA"),
    ('\u{03B5}', "GREEK SMALL LETTER EPSILON"),
    ('\u{03B6}', "GREEK SMALL LETTER ZETA"),
    ('\u{03B7}', "GREEK SMALL LETTER ETA"),
    ('\u{03B8}', "GREEK SMALL LETTER THETA"),
    ('\u{03B9}', "GREEK SMALL LETTER IOTA"),
    ('\u{03BA}', "GREEK SMALL LETTER KAPPA"),
    ('\u{03BB}', "GREEK SMALL LETTER LAMDA"),
    ('\u{03BC}', "GREEK SMALL LETTER MU"),
    ('\u{03BD}', "GREEK SMALL LETTER NU"),
    ('\u{03BE}', "GREEK SMALL LETTER XI"),
    ('\u{03BF}', "GREEK SMALL LETTER OMICRON"),
    ('\u{03C0}', "GREEK SMALL LETTER PI"),
    ('\u{03C1}', "GREEK SMALL LETTER RHO"),
    ('\u{03C2}', "GREEK SMALL LETTER FINAL SIGMA"),
    ('\u{03C3}', "GREEK SMALL LETTER SIGMA"),
    ('\u{03C4}', "GREEK SMALL LETTER TAU"),
    ('\u{03C5}', "GREEK SMALL LETTER UPSILON"),
    ('\u{03C6}', "GREEK SMALL LETTER PHI"),
    ('\u{03C7}', "GREEK SMALL LETTER CHI"),
    ('\u{03C8}', "GREEK SMALL LETTER PSI"),
    ('\u{03C9}', "GREEK SMALL LETTER OMEGA"),
    ('\u{03CA}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA"),
    ('\u{03CB}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA"),
    ('\u{03CC}', "GREEK SMALL LETTER OMICRON WITH TONOS"),
    ('\u{03CD}', "GREEK SMALL LETTER UPSILON WITH TONOS"),
    ('\u{03CE}', "GREEK SMALL LETTER OMEGA WITH TONOS"),
    ('\u{03CF}', "GREEK CAPITAL KAI SYMBOL"),
    ('\u{03D0}', "GREEK BETA SYMBOL"),
    ('\u{03D1}', "GREEK THETA SYMBOL"),
    ('\u{03D2}', "GREEK UPSILON WITH HOOK SYMBOL"),
    ('\u{03D3}', "GREEK UPSILON WITH ACUTE AND HOOK SYMBOL"),
    ('\u{03D4}', "GREEK UPSILON WITH DIAERESIS AND HOOK SYMBOL"),
    ('\u{03D5}', "GREEK PHI SYMBOL"),
    ('\u{03D6}', "GREEK PI SYMBOL"),
    ('\u{03D7}', "GREEK KAI SYMBOL"),
    ('\u{03D8}', "GREEK LETTER ARCHAIC KOPPA"),
    ('\u{03D9}', "GREEK SMALL LETTER ARCHAIC KOPPA"),
    ('\u{03DA}', "GREEK LETTER STIGMA"),
    ('\u{03DB}', "GREEK SMALL LETTER STIGMA"),
    ('\u{03DC}', "GREEK LETTER DIGAMMA"),
    ('\u{03DD}', "GREEK SMALL LETTER DIGAMMA"),
    ('\u{03DE}', "GREEK LETTER KOPPA"),
    ('\u{03DF}', "GREEK SMALL LETTER KOPPA"),
    ('\u{03E0}', "GREEK LETTER SAMPI"),
    ('\u{03E1}', "GREEK SMALL LETTER SAMPI"),
    ('\u{03F0}', "GREEK KAPPA SYMBOL"),
    ('\u{03F1}', "GREEK RHO SYMBOL"),
    ('\u{03F2}', "GREEK LUNATE SIGMA SYMBOL"),
    ('\u{03F3}', "GREEK LETTER YOT"),
    ('\u{03F4}', "GREEK CAPITAL THETA SYMBOL"),
    ('\u{03F5}', "GREEK LUNATE EPSILON SYMBOL"),
    ('\u{03F6}', "GREEK REVERSED LUNATE EPSILON SYMBOL"),
    ('\u{03F7}', "GREEK CAPITAL LETTER SHO"),
    ('\u{03F8}', "GREEK SMALL LETTER SHO"),
    ('\u{03F9}', "GREEK CAPITAL LUNATE SIGMA SYMBOL"),
    ('\u{03FA}', "GREEK CAPITAL LETTER SAN"),
    ('\u{03FB}', "GREEK SMALL LETTER SAN"),
    ('\u{03FC}', "GREEK RHO WITH STROKE SYMBOL"),
    ('\u{03FD}', "GREEK CAPITAL REVERSED LUNATE SIGMA SYMBOL"),
    ('\u{03FE}', "GREEK CAPITAL DOTTED LUNATE SIGMA SYMBOL"),
    ('\u{03FF}', "GREEK CAPITAL REVERSED DOTTED LUNATE SIGMA SYMBOL"),
    ('\u{0587}', "ARMENIAN SMALL LIGATURE ECH YIWN"),
    ('\u{0675}', "ARABIC LETTER HIGH HAMZA ALEF"),
    ('\u{0676}', "ARABIC LETTER HIGH HAMZA WAW"),
    ('\u{0677}', "ARABIC LETTER U WITH HAMZA ABOVE"),
    ('\u{0678}', "ARABIC LETTER HIGH HAMZA YEH"),
    ('\u{0E33}', "THAI CHARACTER SARA AM"),
    ('\u{0EB3}', "LAO VOWEL SIGN AM"),
    ('\u{0EDC}', "LAO HO NO"),
    ('\u{0EDD}', "LAO HO MO"),
    ('\u{0F77}', "TIBETAN VOWEL SIGN VOCALIC RR"),
    ('\u{0F79}', "TIBETAN VOWEL SIGN VOCALIC LL"),
    ('\u{1D26}', "GREEK LETTER SMALL CAPITAL GAMMA"),
    ('\u{1D27}', "GREEK LETTER SMALL CAPITAL LAMDA"),
    ('\u{1D28}', "GREEK LETTER SMALL CAPITAL PI"),
    ('\u{1D29}', "GREEK LETTER SMALL CAPITAL RHO"),
    ('\u{1D2A}', "GREEK LETTER SMALL CAPITAL PSI"),
    ('\u{1D66}', "GREEK SUBSCRIPT SMALL LETTER BETA"),
    ('\u{1D67}', "GREEK SUBSCRIPT SMALL LETTER GAMMA"),
    ('\u{1D68}', "GREEK SUBSCRIPT SMALL LETTER RHO"),
    ('\u{1D69}', "GREEK SUBSCRIPT SMALL LETTER PHI"),
    ('\u{1D6A}', "GREEK SUBSCRIPT SMALL LETTER CHI"),
    ('\u{1E9A}', "LATIN SMALL LETTER A WITH RIGHT HALF RING"),
    ('\u{1F00}', "GREEK SMALL LETTER ALPHA WITH PSILI"),
    ('\u{1F01}', "GREEK SMALL LETTER ALPHA WITH DASIA"),
    ('\u{1F02}', "GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA"),
    ('\u{1F03}', "GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA"),
    ('\u{1F04}', "GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA"),
    ('\u{1F05}', "GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA"),
    ('\u{1F06}', "GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI"),
    ('\u{1F07}', "GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI"),
    ('\u{1F08}', "GREEK CAPITAL LETTER ALPHA WITH PSILI"),
    ('\u{1F09}', "GREEK CAPITAL LETTER ALPHA WITH DASIA"),
    ('\u{1F0A}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA"),
    ('\u{1F0B}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA"),
    ('\u{1F0C}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA"),
    ('\u{1F0D}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA"),
    ('\u{1F0E}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI"),
    ('\u{1F0F}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI"),
    ('\u{1F10}', "GREEK SMALL LETTER EPSILON WITH PSILI"),
    ('\u{1F11}', "GREEK SMALL LETTER EPSILON WITH DASIA"),
    ('\u{1F12}', "GREEK SMALL LETTER EPSILON WITH PSILI AND VARIA"),
    ('\u{1F13}', "GREEK SMALL LETTER EPSILON WITH DASIA AND VARIA"),
    ('\u{1F14}', "GREEK SMALL LETTER EPSILON WITH PSILI AND OXIA"),
    ('\u{1F15}', "GREEK SMALL LETTER EPSILON WITH DASIA AND OXIA"),
    ('\u{1F18}', "GREEK CAPITAL LETTER EPSILON WITH PSILI"),
    ('\u{1F19}', "GREEK CAPITAL LETTER EPSILON WITH DASIA"),
    ('\u{1F1A}', "GREEK CAPITAL LETTER EPSILON WITH PSILI AND VARIA"),
    ('\u{1F1B}', "GREEK CAPITAL LETTER EPSILON WITH DASIA AND VARIA"),
    ('\u{1F1C}', "GREEK CAPITAL LETTER EPSILON WITH PSILI AND OXIA"),
    ('\u{1F1D}', "GREEK CAPITAL LETTER EPSILON WITH DASIA AND OXIA"),
    ('\u{1F20}', "GREEK SMALL LETTER ETA WITH PSILI"),
    ('\u{1F21}', "GREEK SMALL LETTER ETA WITH DASIA"),
    ('\u{1F22}', "GREEK SMALL LETTER ETA WITH PSILI AND VARIA"),
    ('\u{1F23}', "GREEK SMALL LETTER ETA WITH DASIA AND VARIA"),
    ('\u{1F24}', "GREEK SMALL LETTER ETA WITH PSILI AND OXIA"),
    ('\u{1F25}', "GREEK SMALL LETTER ETA WITH DASIA AND OXIA"),
    ('\u{1F26}', "GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI"),
    ('\u{1F27}', "GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI"),
    ('\u{1F28}', "GREEK CAPITAL LETTER ETA WITH PSILI"),
    ('\u{1F29}', "GREEK CAPITAL LETTER ETA WITH DASIA"),
    ('\u{1F2A}', "GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA"),
    ('\u{1F2B}', "GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA"),
    ('\u{1F2C}', "GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA"),
    ('\u{1F2D}', "GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA"),
    ('\u{1F2E}', "GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI"),
    ('\u{1F2F}', "GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI"),
    ('\u{1F30}', "GREEK SMALL LETTER IOTA WITH PSILI"),
    ('\u{1F31}', "GREEK SMALL LETTER IOTA WITH DASIA"),
    ('\u{1F32}', "GREEK SMALL LETTER IOTA WITH PSILI AND VARIA"),
    ('\u{1F33}', "GREEK SMALL LETTER IOTA WITH DASIA AND VARIA"),
    ('\u{1F34}', "GREEK SMALL LETTER IOTA WITH PSILI AND OXIA"),
    ('\u{1F35}', "GREEK SMALL LETTER IOTA WITH DASIA AND OXIA"),
    ('\u{1F36}', "GREEK SMALL LETTER IOTA WITH PSILI AND PERISPOMENI"),
    ('\u{1F37}', "GREEK SMALL LETTER IOTA WITH DASIA AND PERISPOMENI"),
    ('\u{1F38}', "GREEK CAPITAL LETTER IOTA WITH PSILI"),
    ('\u{1F39}', "GREEK CAPITAL LETTER IOTA WITH DASIA"),
    ('\u{1F3A}', "GREEK CAPITAL LETTER IOTA WITH PSILI AND VARIA"),
    ('\u{1F3B}', "GREEK CAPITAL LETTER IOTA WITH DASIA AND VARIA"),
    ('\u{1F3C}', "GREEK CAPITAL LETTER IOTA WITH PSILI AND OXIA"),
    ('\u{1F3D}', "GREEK CAPITAL LETTER IOTA WITH DASIA AND OXIA"),
    ('\u{1F3E}', "GREEK CAPITAL LETTER IOTA WITH PSILI AND PERISPOMENI"),
    ('\u{1F3F}', "GREEK CAPITAL LETTER IOTA WITH DASIA AND PERISPOMENI"),
    ('\u{1F40}', "GREEK SMALL LETTER OMICRON WITH PSILI"),
    ('\u{1F41}', "GREEK SMALL LETTER OMICRON WITH DASIA"),
    ('\u{1F42}', "GREEK SMALL LETTER OMICRON WITH PSILI AND VARIA"),
    ('\u{1F43}', "GREEK SMALL LETTER OMICRON WITH DASIA AND VARIA"),
    ('\u{1F44}', "GREEK SMALL LETTER OMICRON WITH PSILI AND OXIA"),
    ('\u{1F45}', "GREEK SMALL LETTER OMICRON WITH DASIA AND OXIA"),
    ('\u{1F48}', "GREEK CAPITAL LETTER OMICRON WITH PSILI"),
    ('\u{1F49}', "GREEK CAPITAL LETTER OMICRON WITH DASIA"),
    ('\u{1F4A}', "GREEK CAPITAL LETTER OMICRON WITH PSILI AND VARIA"),
    ('\u{1F4B}', "GREEK CAPITAL LETTER OMICRON WITH DASIA AND VARIA"),
    ('\u{1F4C}', "GREEK CAPITAL LETTER OMICRON WITH PSILI AND OXIA"),
    ('\u{1F4D}', "GREEK CAPITAL LETTER OMICRON WITH DASIA AND OXIA"),
    ('\u{1F50}', "GREEK SMALL LETTER UPSILON WITH PSILI"),
    ('\u{1F51}', "GREEK SMALL LETTER UPSILON WITH DASIA"),
    ('\u{1F52}', "GREEK SMALL LETTER UPSILON WITH PSILI AND VARIA"),
    ('\u{1F53}', "GREEK SMALL LETTER UPSILON WITH DASIA AND VARIA"),
    ('\u{1F54}', "GREEK SMALL LETTER UPSILON WITH PSILI AND OXIA"),
    ('\u{1F55}', "GREEK SMALL LETTER UPSILON WITH DASIA AND OXIA"),
    ('\u{1F56}', "GREEK SMALL LETTER UPSILON WITH PSILI AND PERISPOMENI"),
    ('\u{1F57}', "GREEK SMALL LETTER UPSILON WITH DASIA AND PERISPOMENI"),
    ('\u{1F59}', "GREEK CAPITAL LETTER UPSILON WITH DASIA"),
    ('\u{1F5B}', "GREEK CAPITAL LETTER UPSILON WITH DASIA AND VARIA"),
    ('\u{1F5D}', "GREEK CAPITAL LETTER UPSILON WITH DASIA AND OXIA"),
    ('\u{1F5F}', "GREEK CAPITAL LETTER UPSILON WITH DASIA AND PERISPOMENI"),
    ('\u{1F60}', "GREEK SMALL LETTER OMEGA WITH PSILI"),
    ('\u{1F61}', "GREEK SMALL LETTER OMEGA WITH DASIA"),
    ('\u{1F62}', "GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA"),
    ('\u{1F63}', "GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA"),
    ('\u{1F64}', "GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA"),
    ('\u{1F65}', "GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA"),
    ('\u{1F66}', "GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI"),
    ('\u{1F67}', "GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI"),
    ('\u{1F68}', "GREEK CAPITAL LETTER OMEGA WITH PSILI"),
    ('\u{1F69}', "GREEK CAPITAL LETTER OMEGA WITH DASIA"),
    ('\u{1F6A}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA"),
    ('\u{1F6B}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA"),
    ('\u{1F6C}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA"),
    ('\u{1F6D}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA"),
    ('\u{1F6E}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI"),
    ('\u{1F6F}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI"),
    ('\u{1F70}', "GREEK SMALL LETTER ALPHA WITH VARIA"),
    ('\u{1F71}', "GREEK SMALL LETTER ALPHA WITH OXIA"),
    ('\u{1F72}', "GREEK SMALL LETTER EPSILON WITH VARIA"),
    ('\u{1F73}', "GREEK SMALL LETTER EPSILON WITH OXIA"),
    ('\u{1F74}', "GREEK SMALL LETTER ETA WITH VARIA"),
    ('\u{1F75}', "GREEK SMALL LETTER ETA WITH OXIA"),
    ('\u{1F76}', "GREEK SMALL LETTER IOTA WITH VARIA"),
    ('\u{1F77}', "GREEK SMALL LETTER IOTA WITH OXIA"),
    ('\u{1F78}', "GREEK SMALL LETTER OMICRON WITH VARIA"),
    ('\u{1F79}', "GREEK SMALL LETTER OMICRON WITH OXIA"),
    ('\u{1F7A}', "GREEK SMALL LETTER UPSILON WITH VARIA"),
    ('\u{1F7B}', "GREEK SMALL LETTER UPSILON WITH OXIA"),
    ('\u{1F7C}', "GREEK SMALL LETTER OMEGA WITH VARIA"),
    ('\u{1F7D}', "GREEK SMALL LETTER OMEGA WITH OXIA"),
    ('\u{1F80}', "GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI"),
    ('\u{1F81}', "GREEK SMALL LETTER ALPHA WITH DASIA AND YPOGEGRAMMENI"),
    ('\u{1F82}', "GREEK SMALL LETTER ALPHA WITH PSILI AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1F83}', "GREEK SMALL LETTER ALPHA WITH DASIA AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1F84}', "GREEK SMALL LETTER ALPHA WITH PSILI AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1F85}', "GREEK SMALL LETTER ALPHA WITH DASIA AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1F86}', "GREEK SMALL LETTER ALPHA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1F87}', "GREEK SMALL LETTER ALPHA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1F88}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PROSGEGRAMMENI"),
    ('\u{1F89}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PROSGEGRAMMENI"),
    ('\u{1F8A}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1F8B}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1F8C}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1F8D}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1F8E}', "GREEK CAPITAL LETTER ALPHA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1F8F}', "GREEK CAPITAL LETTER ALPHA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1F90}', "GREEK SMALL LETTER ETA WITH PSILI AND YPOGEGRAMMENI"),
    ('\u{1F91}', "GREEK SMALL LETTER ETA WITH DASIA AND YPOGEGRAMMENI"),
    ('\u{1F92}', "GREEK SMALL LETTER ETA WITH PSILI AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1F93}', "GREEK SMALL LETTER ETA WITH DASIA AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1F94}', "GREEK SMALL LETTER ETA WITH PSILI AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1F95}', "GREEK SMALL LETTER ETA WITH DASIA AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1F96}', "GREEK SMALL LETTER ETA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1F97}', "GREEK SMALL LETTER ETA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1F98}', "GREEK CAPITAL LETTER ETA WITH PSILI AND PROSGEGRAMMENI"),
    ('\u{1F99}', "GREEK CAPITAL LETTER ETA WITH DASIA AND PROSGEGRAMMENI"),
    ('\u{1F9A}', "GREEK CAPITAL LETTER ETA WITH PSILI AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1F9B}', "GREEK CAPITAL LETTER ETA WITH DASIA AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1F9C}', "GREEK CAPITAL LETTER ETA WITH PSILI AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1F9D}', "GREEK CAPITAL LETTER ETA WITH DASIA AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1F9E}', "GREEK CAPITAL LETTER ETA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1F9F}', "GREEK CAPITAL LETTER ETA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1FA0}', "GREEK SMALL LETTER OMEGA WITH PSILI AND YPOGEGRAMMENI"),
    ('\u{1FA1}', "GREEK SMALL LETTER OMEGA WITH DASIA AND YPOGEGRAMMENI"),
    ('\u{1FA2}', "GREEK SMALL LETTER OMEGA WITH PSILI AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1FA3}', "GREEK SMALL LETTER OMEGA WITH DASIA AND VARIA AND YPOGEGRAMMENI"),
    ('\u{1FA4}', "GREEK SMALL LETTER OMEGA WITH PSILI AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1FA5}', "GREEK SMALL LETTER OMEGA WITH DASIA AND OXIA AND YPOGEGRAMMENI"),
    ('\u{1FA6}', "GREEK SMALL LETTER OMEGA WITH PSILI AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1FA7}', "GREEK SMALL LETTER OMEGA WITH DASIA AND PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1FA8}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PROSGEGRAMMENI"),
    ('\u{1FA9}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PROSGEGRAMMENI"),
    ('\u{1FAA}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1FAB}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND VARIA AND PROSGEGRAMMENI"),
    ('\u{1FAC}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1FAD}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND OXIA AND PROSGEGRAMMENI"),
    ('\u{1FAE}', "GREEK CAPITAL LETTER OMEGA WITH PSILI AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1FAF}', "GREEK CAPITAL LETTER OMEGA WITH DASIA AND PERISPOMENI AND PROSGEGRAMMENI"),
    ('\u{1FB0}', "GREEK SMALL LETTER ALPHA WITH VRACHY"),
    ('\u{1FB1}', "GREEK SMALL LETTER ALPHA WITH MACRON"),
    ('\u{1FB2}', "GREEK SMALL LETTER ALPHA WITH VARIA AND YPOGEGRAMMENI"),
    ('\u{1FB3}', "GREEK SMALL LETTER ALPHA WITH YPOGEGRAMMENI"),
    ('\u{1FB4}', "GREEK SMALL LETTER ALPHA WITH OXIA AND YPOGEGRAMMENI"),
    ('\u{1FB6}', "GREEK SMALL LETTER ALPHA WITH PERISPOMENI"),
    ('\u{1FB7}', "GREEK SMALL LETTER ALPHA WITH PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1FB8}', "GREEK CAPITAL LETTER ALPHA WITH VRACHY"),
    ('\u{1FB9}', "GREEK CAPITAL LETTER ALPHA WITH MACRON"),
    ('\u{1FBA}', "GREEK CAPITAL LETTER ALPHA WITH VARIA"),
    ('\u{1FBB}', "GREEK CAPITAL LETTER ALPHA WITH OXIA"),
    ('\u{1FBC}', "GREEK CAPITAL LETTER ALPHA WITH PROSGEGRAMMENI"),
    ('\u{1FBD}', "GREEK KORONIS"),
    ('\u{1FBE}', "GREEK PROSGEGRAMMENI"),
    ('\u{1FBF}', "GREEK PSILI"),
    ('\u{1FC0}', "GREEK PERISPOMENI"),
    ('\u{1FC1}', "GREEK DIALYTIKA AND PERISPOMENI"),
    ('\u{1FC2}', "GREEK SMALL LETTER ETA WITH VARIA AND YPOGEGRAMMENI"),
    ('\u{1FC3}', "GREEK SMALL LETTER ETA WITH YPOGEGRAMMENI"),
    ('\u{1FC4}', "GREEK SMALL LETTER ETA WITH OXIA AND YPOGEGRAMMENI"),
    ('\u{1FC6}', "GREEK SMALL LETTER ETA WITH PERISPOMENI"),
    ('\u{1FC7}', "GREEK SMALL LETTER ETA WITH PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1FC8}', "GREEK CAPITAL LETTER EPSILON WITH VARIA"),
    ('\u{1FC9}', "GREEK CAPITAL LETTER EPSILON WITH OXIA"),
    ('\u{1FCA}', "GREEK CAPITAL LETTER ETA WITH VARIA"),
    ('\u{1FCB}', "GREEK CAPITAL LETTER ETA WITH OXIA"),
    ('\u{1FCC}', "GREEK CAPITAL LETTER ETA WITH PROSGEGRAMMENI"),
    ('\u{1FCD}', "GREEK PSILI AND VARIA"),
    ('\u{1FCE}', "GREEK PSILI AND OXIA"),
    ('\u{1FCF}', "GREEK PSILI AND PERISPOMENI"),
    ('\u{1FD0}', "GREEK SMALL LETTER IOTA WITH VRACHY"),
    ('\u{1FD1}', "GREEK SMALL LETTER IOTA WITH MACRON"),
    ('\u{1FD2}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND VARIA"),
    ('\u{1FD3}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND OXIA"),
    ('\u{1FD6}', "GREEK SMALL LETTER IOTA WITH PERISPOMENI"),
    ('\u{1FD7}', "GREEK SMALL LETTER IOTA WITH DIALYTIKA AND PERISPOMENI"),
    ('\u{1FD8}', "GREEK CAPITAL LETTER IOTA WITH VRACHY"),
    ('\u{1FD9}', "GREEK CAPITAL LETTER IOTA WITH MACRON"),
    ('\u{1FDA}', "GREEK CAPITAL LETTER IOTA WITH VARIA"),
    ('\u{1FDB}', "GREEK CAPITAL LETTER IOTA WITH OXIA"),
    ('\u{1FDD}', "GREEK DASIA AND VARIA"),
    ('\u{1FDE}', "GREEK DASIA AND OXIA"),
    ('\u{1FDF}', "GREEK DASIA AND PERISPOMENI"),
    ('\u{1FE0}', "GREEK SMALL LETTER UPSILON WITH VRACHY"),
    ('\u{1FE1}', "GREEK SMALL LETTER UPSILON WITH MACRON"),
    ('\u{1FE2}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND VARIA"),
    ('\u{1FE3}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND OXIA"),
    ('\u{1FE4}', "GREEK SMALL LETTER RHO WITH PSILI"),
    ('\u{1FE5}', "GREEK SMALL LETTER RHO WITH DASIA"),
    ('\u{1FE6}', "GREEK SMALL LETTER UPSILON WITH PERISPOMENI"),
    ('\u{1FE7}', "GREEK SMALL LETTER UPSILON WITH DIALYTIKA AND PERISPOMENI"),
    ('\u{1FE8}', "GREEK CAPITAL LETTER UPSILON WITH VRACHY"),
    ('\u{1FE9}', "GREEK CAPITAL LETTER UPSILON WITH MACRON"),
    ('\u{1FEA}', "GREEK CAPITAL LETTER UPSILON WITH VARIA"),
    ('\u{1FEB}', "GREEK CAPITAL LETTER UPSILON WITH OXIA"),
    ('\u{1FEC}', "GREEK CAPITAL LETTER RHO WITH DASIA"),
    ('\u{1FED}', "GREEK DIALYTIKA AND VARIA"),
    ('\u{1FEE}', "GREEK DIALYTIKA AND OXIA"),
    ('\u{1FEF}', "GREEK VARIA"),
    ('\u{1FF2}', "GREEK SMALL LETTER OMEGA WITH VARIA AND YPOGEGRAMMENI"),
    ('\u{1FF3}', "GREEK SMALL LETTER OMEGA WITH YPOGEGRAMMENI"),
    ('\u{1FF4}', "GREEK SMALL LETTER OMEGA WITH OXIA AND YPOGEGRAMMENI"),
    ('\u{1FF6}', "GREEK SMALL LETTER OMEGA WITH PERISPOMENI"),
    ('\u{1FF7}', "GREEK SMALL LETTER OMEGA WITH PERISPOMENI AND YPOGEGRAMMENI"),
    ('\u{1FF8}', "GREEK CAPITAL LETTER OMICRON WITH VARIA"),
    ('\u{1FF9}', "GREEK CAPITAL LETTER OMICRON WITH OXIA"),
    ('\u{1FFA}', "GREEK CAPITAL LETTER OMEGA WITH VARIA"),
    ('\u{1FFB}', "GREEK CAPITAL LETTER OMEGA WITH OXIA"),
    ('\u{1FFC}', "GREEK CAPITAL LETTER OMEGA WITH PROSGEGRAMMENI"),
    ('\u{1FFD}', "GREEK OXIA"),
    ('\u{1FFE}', "GREEK DASIA"),
    ('\u{2002}', "EN SPACE"),
    ('\u{2003}', "EM SPACE"),
    ('\u{2004}', "THREE-PER-EM SPACE"),
    ('\u{2005}', "FOUR-PER-EM SPACE"),
    ('\u{2006}', "SIX-PER-EM SPACE"),
    ('\u{2008}', "PUNCTUATION SPACE"),
    ('\u{2009}', "THIN SPACE"),
    ('\u{200A}', "HAIR SPACE"),
    ('\u{2017}', "DOUBLE LOW LINE"),
    ('\u{2024}', "ONE DOT LEADER"),
    ('\u{2025}', "TWO DOT LEADER"),
    ('\u{2026}', "HORIZONTAL ELLIPSIS"),
    ('\u{2033}', "DOUBLE PRIME"),
    ('\u{2034}', "TRIPLE PRIME"),
    ('\u{2036}', "REVERSED DOUBLE PRIME"),
    ('\u{2037}', "REVERSED TRIPLE PRIME"),
    ('\u{203C}', "DOUBLE EXCLAMATION MARK"),
    ('\u{203E}', "OVERLINE"),
    ('\u{2047}', "DOUBLE QUESTION MARK"),
    ('\u{2048}', "QUESTION EXCLAMATION MARK"),
    ('\u{2049}', "EXCLAMATION QUESTION MARK"),
    ('\u{2057}', "QUADRUPLE PRIME"),
    ('\u{205F}', "MEDIUM MATHEMATICAL SPACE"),
    ('\u{20A8}', "RUPEE SIGN"),
    ('\u{2100}', "ACCOUNT OF"),
    ('\u{2101}', "ADDRESSED TO THE SUBJECT"),
    ('\u{2102}', "DOUBLE-STRUCK CAPITAL C"),
    ('\u{2103}', "DEGREE CELSIUS"),
    ('\u{2105}', "CARE OF"),
    ('\u{2106}', "CADA UNA"),
    ('\u{2107}', "EULER CONSTANT"),
    ('\u{2109}', "DEGREE FAHRENHEIT"),
    ('\u{210A}', "SCRIPT SMALL G"),
    ('\u{210B}', "SCRIPT CAPITAL H"),
    ('\u{210C}', "BLACK-LETTER CAPITAL H"),
    ('\u{210D}', "DOUBLE-STRUCK CAPITAL H"),
    ('\u{210E}', "PLANCK CONSTANT"),
    ('\u{210F}', "PLANCK CONSTANT OVER TWO PI"),
    ('\u{2110}', "SCRIPT CAPITAL I"),
    ('\u{2111}', "BLACK-LETTER CAPITAL I"),
    ('\u{2112}', "SCRIPT CAPITAL L"),
    ('\u{2113}', "SCRIPT SMALL L"),
    ('\u{2115}', "DOUBLE-STRUCK CAPITAL N"),
    ('\u{2116}', "NUMERO SIGN"),
    ('\u{2119}', "DOUBLE-STRUCK CAPITAL P"),
    ('\u{211A}', "DOUBLE-STRUCK CAPITAL Q"),
    ('\u{211B}', "SCRIPT CAPITAL R"),
    ('\u{211C}', "BLACK-LETTER CAPITAL R"),
    ('\u{211D}', "DOUBLE-STRUCK CAPITAL R"),
    ('\u{2121}', "TELEPHONE SIGN"),
    ('\u{2124}', "DOUBLE-STRUCK CAPITAL Z"),
    ('\u{2128}', "BLACK-LETTER CAPITAL Z"),
    ('\u{212C}', "SCRIPT CAPITAL B"),
    ('\u{212D}', "BLACK-LETTER CAPITAL C"),
    ('\u{212F}', "SCRIPT SMALL E"),
    ('\u{2130}', "SCRIPT CAPITAL E"),
    ('\u{2131}', "SCRIPT CAPITAL F"),
    ('\u{2133}', "SCRIPT CAPITAL M"),
    ('\u{2134}', "SCRIPT SMALL O"),
    ('\u{2135}', "ALEF SYMBOL"),
    ('\u{2136}', "BET SYMBOL"),
    ('\u{2137}', "GIMEL SYMBOL"),
    ('\u{2138}', "DALET SYMBOL"),
    ('\u{2139}', "INFORMATION SOURCE"),
    ('\u{213B}', "FACSIMILE SIGN"),
    ('\u{213C}', "DOUBLE-STRUCK SMALL PI"),
    ('\u{213D}', "DOUBLE-STRUCK SMALL GAMMA"),
    ('\u{213E}', "DOUBLE-STRUCK CAPITAL GAMMA"),
    ('\u{213F}', "DOUBLE-STRUCK CAPITAL PI"),
    ('\u{2140}', "DOUBLE-STRUCK N-ARY SUMMATION"),
    ('\u{2145}', "DOUBLE-STRUCK ITALIC CAPITAL D"),
    ('\u{2146}', "DOUBLE-STRUCK ITALIC SMALL D"),
    ('\u{2147}', "DOUBLE-STRUCK ITALIC SMALL E"),
    ('\u{2148}', "DOUBLE-STRUCK ITALIC SMALL I"),
    ('\u{2149}', "DOUBLE-STRUCK ITALIC SMALL J"),
    ('\u{2160}', "ROMAN NUMERAL ONE"),
    ('\u{2161}', "ROMAN NUMERAL TWO"),
    ('\u{2162}', "ROMAN NUMERAL THREE"),
    ('\u{2163}', "ROMAN NUMERAL FOUR"),
    ('\u{2164}', "ROMAN NUMERAL FIVE"),
    ('\u{2165}', "ROMAN NUMERAL SIX"),
    ('\u{2166}', "ROMAN NUMERAL SEVEN"),
    ('\u{2167}', "ROMAN NUMERAL EIGHT"),
    ('\u{2168}', "ROMAN NUMERAL NINE"),
    ('\u{2169}', "ROMAN NUMERAL TEN"),
    ('\u{216A}', "ROMAN NUMERAL ELEVEN"),
    ('\u{216B}', "ROMAN NUMERAL TWELVE"),
    ('\u{216C}', "ROMAN NUMERAL FIFTY"),
    ('\u{216D}', "ROMAN NUMERAL ONE HUNDRED"),
    ('\u{216E}', "ROMAN NUMERAL FIVE HUNDRED"),
    ('\u{216F}', "ROMAN NUMERAL ONE THOUSAND"),
    ('\u{2170}', "SMALL ROMAN NUMERAL ONE"),
    ('\u{2171}', "SMALL ROMAN NUMERAL TWO"),
    ('\u{2172}', "SMALL ROMAN NUMERAL THREE"),
    ('\u{2173}', "SMALL ROMAN NUMERAL FOUR"),
    ('\u{2174}', "SMALL ROMAN NUMERAL FIVE"),
    ('\u{2175}', "SMALL ROMAN NUMERAL SIX"),
    ('\u{2176}', "SMALL ROMAN NUMERAL SEVEN"),
    ('\u{2177}', "SMALL ROMAN NUMERAL EIGHT"),
    ('\u{2178}', "SMALL ROMAN NUMERAL NINE"),
    ('\u{2179}', "SMALL ROMAN NUMERAL TEN"),
    ('\u{217A}', "SMALL ROMAN NUMERAL ELEVEN"),
    ('\u{217B}', "SMALL ROMAN NUMERAL TWELVE"),
    ('\u{217C}', "SMALL ROMAN NUMERAL FIFTY"),
    ('\u{217D}', "SMALL ROMAN NUMERAL ONE HUNDRED"),
    ('\u{217E}', "SMALL ROMAN NUMERAL FIVE HUNDRED"),
    ('\u{217F}', "SMALL ROMAN NUMERAL ONE THOUSAND"),
    ('\u{222C}', "DOUBLE INTEGRAL"),
    ('\u{222D}', "TRIPLE INTEGRAL"),
    ('\u{222F}', "SURFACE INTEGRAL"),
    ('\u{2230}', "VOLUME INTEGRAL"),
    ('\u{2474}', "PARENTHESIZED DIGIT ONE"),
    ('\u{2475}', "PARENTHESIZED DIGIT TWO"),
    ('\u{2476}', "PARENTHESIZED DIGIT THREE"),
    ('\u{2477}', "PARENTHESIZED DIGIT FOUR"),
    ('\u{2478}', "PARENTHESIZED DIGIT FIVE"),
    ('\u{2479}', "PARENTHESIZED DIGIT SIX"),
    ('\u{247A}', "PARENTHESIZED DIGIT SEVEN"),
    ('\u{247B}', "PARENTHESIZED DIGIT EIGHT"),
    ('\u{247C}', "PARENTHESIZED DIGIT NINE"),
    ('\u{247D}', "PARENTHESIZED NUMBER TEN"),
    ('\u{247E}', "PARENTHESIZED NUMBER ELEVEN"),
    ('\u{247F}', "PARENTHESIZED NUMBER TWELVE"),
    ('\u{2480}', "PARENTHESIZED NUMBER THIRTEEN"),
    ('\u{2481}', "PARENTHESIZED NUMBER FOURTEEN"),
    ('\u{2482}', "PARENTHESIZED NUMBER FIFTEEN"),
    ('\u{2483}', "PARENTHESIZED NUMBER SIXTEEN"),
    ('\u{2484}', "PARENTHESIZED NUMBER SEVENTEEN"),
    ('\u{2485}', "PARENTHESIZED NUMBER EIGHTEEN"),
    ('\u{2486}', "PARENTHESIZED NUMBER NINETEEN"),
    ('\u{2487}', "PARENTHESIZED NUMBER TWENTY"),
    ('\u{2488}', "DIGIT ONE FULL STOP"),
    ('\u{2489}', "DIGIT TWO FULL STOP"),
    ('\u{248A}', "DIGIT THREE FULL STOP"),
    ('\u{248B}', "DIGIT FOUR FULL STOP"),
    ('\u{248C}', "DIGIT FIVE FULL STOP"),
    ('\u{248D}', "DIGIT SIX FULL STOP"),
    ('\u{248E}', "DIGIT SEVEN FULL STOP"),
    ('\u{248F}', "DIGIT EIGHT FULL STOP"),
    ('\u{2490}', "DIGIT NINE FULL STOP"),
    ('\u{2491}', "NUMBER TEN FULL STOP"),
    ('\u{2492}', "NUMBER ELEVEN FULL STOP"),
    ('\u{2493}', "NUMBER TWELVE FULL STOP"),
    ('\u{2494}', "NUMBER THIRTEEN FULL STOP"),
    ('\u{2495}', "NUMBER FOURTEEN FULL STOP"),
    ('\u{2496}', "NUMBER FIFTEEN FULL STOP"),
    ('\u{2497}', "NUMBER SIXTEEN FULL STOP"),
    ('\u{2498}', "NUMBER SEVENTEEN FULL STOP"),
    ('\u{2499}', "NUMBER EIGHTEEN FULL STOP"),
    ('\u{249A}', "NUMBER NINETEEN FULL STOP"),
    ('\u{249B}', "NUMBER TWENTY FULL STOP"),
    ('\u{249C}', "PARENTHESIZED LATIN SMALL LETTER A"),
    ('\u{249D}', "PARENTHESIZED LATIN SMALL LETTER B"),
    ('\u{249E}', "PARENTHESIZED LATIN SMALL LETTER C"),
    ('\u{249F}', "PARENTHESIZED LATIN SMALL LETTER D"),
    ('\u{24A0}', "PARENTHESIZED LATIN SMALL LETTER E"),
    ('\u{24A1}', "PARENTHESIZED LATIN SMALL LETTER F"),
    ('\u{24A2}', "PARENTHESIZED LATIN SMALL LETTER G"),
    ('\u{24A3}', "PARENTHESIZED LATIN SMALL LETTER H"),
    ('\u{24A4}', "PARENTHESIZED LATIN SMALL LETTER I"),
    ('\u{24A5}', "PARENTHESIZED LATIN SMALL LETTER J"),
    ('\u{24A6}', "PARENTHESIZED LATIN SMALL LETTER K"),
    ('\u{24A7}', "PARENTHESIZED LATIN SMALL LETTER L"),
    ('\u{24A8}', "PARENTHESIZED LATIN SMALL LETTER M"),
    ('\u{24A9}', "PARENTHESIZED LATIN SMALL LETTER N"),
    ('\u{24AA}', "PARENTHESIZED LATIN SMALL LETTER O"),
    ('\u{24AB}', "PARENTHESIZED LATIN SMALL LETTER P"),
    ('\u{24AC}', "PARENTHESIZED LATIN SMALL LETTER Q"),
    ('\u{24AD}', "PARENTHESIZED LATIN SMALL LETTER R"),
    ('\u{24AE}', "PARENTHESIZED LATIN SMALL LETTER S"),
    ('\u{24AF}', "PARENTHESIZED LATIN SMALL LETTER T"),
    ('\u{24B0}', "PARENTHESIZED LATIN SMALL LETTER U"),
    ('\u{24B1}', "PARENTHESIZED LATIN SMALL LETTER V"),
    ('\u{24B2}', "PARENTHESIZED LATIN SMALL LETTER W"),
    ('\u{24B3}', "PARENTHESIZED LATIN SMALL LETTER X"),
    ('\u{24B4}', "PARENTHESIZED LATIN SMALL LETTER Y"),
    ('\u{24B5}', "PARENTHESIZED LATIN SMALL LETTER Z"),
    ('\u{2A0C}', "QUADRUPLE INTEGRAL OPERATOR"),
    ('\u{2A74}', "DOUBLE COLON EQUAL"),
    ('\u{2A75}', "TWO CONSECUTIVE EQUALS SIGNS"),
    ('\u{2A76}', "THREE CONSECUTIVE EQUALS SIGNS"),
    ('\u{2E9F}', "CJK RADICAL MOTHER"),
    ('\u{2EF3}', "CJK RADICAL C-SIMPLIFIED TURTLE"),
    ('\u{2F00}', "KANGXI RADICAL ONE"),
    ('\u{2F01}', "KANGXI RADICAL LINE"),
    ('\u{2F02}', "KANGXI RADICAL DOT"),
    ('\u{2F03}', "KANGXI RADICAL SLASH"),
    ('\u{2F04}', "KANGXI RADICAL SECOND"),
    ('\u{2F05}', "KANGXI RADICAL HOOK"),
    ('\u{2F06}', "KANGXI RADICAL TWO"),
    ('\u{2F07}', "KANGXI RADICAL LID"),
    ('\u{2F08}', "KANGXI RADICAL MAN"),
    ('\u{2F09}', "KANGXI RADICAL LEGS"),
    ('\u{2F0A}', "KANGXI RADICAL ENTER"),
    ('\u{2F0B}', "KANGXI RADICAL EIGHT"),
    ('\u{2F0C}', "KANGXI RADICAL DOWN BOX"),
    ('\u{2F0D}', "KANGXI RADICAL COVER"),
    ('\u{2F0E}', "KANGXI RADICAL ICE"),
    ('\u{2F0F}', "KANGXI RADICAL TABLE"),
    ('\u{2F10}', "KANGXI RADICAL OPEN BOX"),
    ('\u{2F11}', "KANGXI RADICAL KNIFE"),
    ('\u{2F12}', "KANGXI RADICAL POWER"),
    ('\u{2F13}', "KANGXI RADICAL WRAP"),
    ('\u{2F14}', "KANGXI RADICAL SPOON"),
    ('\u{2F15}', "KANGXI RADICAL RIGHT OPEN BOX"),
    ('\u{2F16}', "KANGXI RADICAL HIDING ENCLOSURE"),
    ('\u{2F17}', "KANGXI RADICAL TEN"),
    ('\u{2F18}', "KANGXI RADICAL DIVINATION"),
    ('\u{2F19}', "KANGXI RADICAL SEAL"),
    ('\u{2F1A}', "KANGXI RADICAL CLIFF"),
    ('\u{2F1B}', "KANGXI RADICAL PRIVATE"),
    ('\u{2F1C}', "KANGXI RADICAL AGAIN"),
    ('\u{2F1D}', "KANGXI RADICAL MOUTH"),
    ('\u{2F1E}', "KANGXI RADICAL ENCLOSURE"),
    ('\u{2F1F}', "KANGXI RADICAL EARTH"),
    ('\u{2F20}', "KANGXI RADICAL SCHOLAR"),
    ('\u{2F21}', "KANGXI RADICAL GO"),
    ('\u{2F22}', "KANGXI RADICAL GO SLOWLY"),
    ('\u{2F23}', "KANGXI RADICAL EVENING"),
    ('\u{2F24}', "KANGXI RADICAL BIG"),
    ('\u{2F25}', "KANGXI RADICAL WOMAN"),
    ('\u{2F26}', "KANGXI RADICAL CHILD"),
    ('\u{2F27}', "KANGXI RADICAL ROOF"),
    ('\u{2F28}', "KANGXI RADICAL INCH"),
    ('\u{2F29}', "KANGXI RADICAL SMALL"),
    ('\u{2F2A}', "KANGXI RADICAL LAME"),
    ('\u{2F2B}', "KANGXI RADICAL CORPSE"),
    ('\u{2F2C}', "KANGXI RADICAL SPROUT"),
    ('\u{2F2D}', "KANGXI RADICAL MOUNTAIN"),
    ('\u{2F2E}', "KANGXI RADICAL RIVER"),
    ('\u{2F2F}', "KANGXI RADICAL WORK"),
    ('\u{2F30}', "KANGXI RADICAL ONESELF"),
    ('\u{2F31}', "KANGXI RADICAL TURBAN"),
    ('\u{2F32}', "KANGXI RADICAL DRY"),
    ('\u{2F33}', "KANGXI RADICAL SHORT THREAD"),
    ('\u{2F34}', "KANGXI RADICAL DOTTED CLIFF"),
    ('\u{2F35}', "KANGXI RADICAL LONG STRIDE"),
    ('\u{2F36}', "KANGXI RADICAL TWO HANDS"),
    ('\u{2F37}', "KANGXI RADICAL SHOOT"),
    ('\u{2F38}', "KANGXI RADICAL BOW"),
    ('\u{2F39}', "KANGXI RADICAL SNOUT"),
    ('\u{2F3A}', "KANGXI RADICAL BRISTLE"),
    ('\u{2F3B}', "KANGXI RADICAL STEP"),
    ('\u{2F3C}', "KANGXI RADICAL HEART"),
    ('\u{2F3D}', "KANGXI RADICAL HALBERD"),
    ('\u{2F3E}', "KANGXI RADICAL DOOR"),
    ('\u{2F3F}', "KANGXI RADICAL HAND"),
    ('\u{2F40}', "KANGXI RADICAL BRANCH"),
    ('\u{2F41}', "KANGXI RADICAL RAP"),
    ('\u{2F42}', "KANGXI RADICAL SCRIPT"),
    ('\u{2F43}', "KANGXI RADICAL DIPPER"),
    ('\u{2F44}', "KANGXI RADICAL AXE"),
    ('\u{2F45}', "KANGXI RADICAL SQUARE"),
    ('\u{2F46}', "KANGXI RADICAL NOT"),
    ('\u{2F47}', "KANGXI RADICAL SUN"),
    ('\u{2F48}', "KANGXI RADICAL SAY"),
    ('\u{2F49}', "KANGXI RADICAL MOON"),
    ('\u{2F4A}', "KANGXI RADICAL TREE"),
    ('\u{2F4B}', "KANGXI RADICAL LACK"),
    ('\u{2F4C}', "KANGXI RADICAL STOP"),
    ('\u{2F4D}', "KANGXI RADICAL DEATH"),
    ('\u{2F4E}', "KANGXI RADICAL WEAPON"),
    ('\u{2F4F}', "KANGXI RADICAL DO NOT"),
    ('\u{2F50}', "KANGXI RADICAL COMPARE"),
    ('\u{2F51}', "KANGXI RADICAL FUR"),
    ('\u{2F52}', "KANGXI RADICAL CLAN"),
    ('\u{2F53}', "KANGXI RADICAL STEAM"),
    ('\u{2F54}', "KANGXI RADICAL WATER"),
    ('\u{2F55}', "KANGXI RADICAL FIRE"),
    ('\u{2F56}', "KANGXI RADICAL CLAW"),
    ('\u{2F57}', "KANGXI RADICAL FATHER"),
    ('\u{2F58}', "KANGXI RADICAL DOUBLE X"),
    ('\u{2F59}', "KANGXI RADICAL HALF TREE TRUNK"),
    ('\u{2F5A}', "KANGXI RADICAL SLICE"),
    ('\u{2F5B}', "KANGXI RADICAL FANG"),
    ('\u{2F5C}', "KANGXI RADICAL COW"),
    ('\u{2F5D}', "KANGXI RADICAL DOG"),
    ('\u{2F5E}', "KANGXI RADICAL PROFOUND"),
    ('\u{2F5F}', "KANGXI RADICAL JADE"),
    ('\u{2F60}', "KANGXI RADICAL MELON"),
    ('\u{2F61}', "KANGXI RADICAL TILE"),
    ('\u{2F62}', "KANGXI RADICAL SWEET"),
    ('\u{2F63}', "KANGXI RADICAL LIFE"),
    ('\u{2F64}', "KANGXI RADICAL USE"),
    ('\u{2F65}', "KANGXI RADICAL FIELD"),
    ('\u{2F66}', "KANGXI RADICAL BOLT OF CLOTH"),
    ('\u{2F67}', "KANGXI RADICAL SICKNESS"),
    ('\u{2F68}', "KANGXI RADICAL DOTTED TENT"),
    ('\u{2F69}', "KANGXI RADICAL WHITE"),
    ('\u{2F6A}', "KANGXI RADICAL SKIN"),
    ('\u{2F6B}', "KANGXI RADICAL DISH"),
    ('\u{2F6C}', "KANGXI RADICAL EYE"),
    ('\u{2F6D}', "KANGXI RADICAL SPEAR"),
    ('\u{2F6E}', "KANGXI RADICAL ARROW"),
    ('\u{2F6F}', "KANGXI RADICAL STONE"),
    ('\u{2F70}', "KANGXI RADICAL SPIRIT"),
    ('\u{2F71}', "KANGXI RADICAL TRACK"),
    ('\u{2F72}', "KANGXI RADICAL GRAIN"),
    ('\u{2F73}', "KANGXI RADICAL CAVE"),
    ('\u{2F74}', "KANGXI RADICAL STAND"),
    ('\u{2F75}', "KANGXI RADICAL BAMBOO"),
    ('\u{2F76}', "KANGXI RADICAL RICE"),
    ('\u{2F77}', "KANGXI RADICAL SILK"),
    ('\u{2F78}', "KANGXI RADICAL JAR"),
    ('\u{2F79}', "KANGXI RADICAL NET"),
    ('\u{2F7A}', "KANGXI RADICAL SHEEP"),
    ('\u{2F7B}', "KANGXI RADICAL FEATHER"),
    ('\u{2F7C}', "KANGXI RADICAL OLD"),
    ('\u{2F7D}', "KANGXI RADICAL AND"),
    ('\u{2F7E}', "KANGXI RADICAL PLOW"),
    ('\u{2F7F}', "KANGXI RADICAL EAR"),
    ('\u{2F80}', "KANGXI RADICAL BRUSH"),
    ('\u{2F81}', "KANGXI RADICAL MEAT"),
    ('\u{2F82}', "KANGXI RADICAL MINISTER"),
    ('\u{2F83}', "KANGXI RADICAL SELF"),
    ('\u{2F84}', "KANGXI RADICAL ARRIVE"),
    ('\u{2F85}', "KANGXI RADICAL MORTAR"),
    ('\u{2F86}', "KANGXI RADICAL TONGUE"),
    ('\u{2F87}', "KANGXI RADICAL OPPOSE"),
    ('\u{2F88}', "KANGXI RADICAL BOAT"),
    ('\u{2F89}', "KANGXI RADICAL STOPPING"),
    ('\u{2F8A}', "KANGXI RADICAL COLOR"),
    ('\u{2F8B}', "KANGXI RADICAL GRASS"),
    ('\u{2F8C}', "KANGXI RADICAL TIGER"),
    ('\u{2F8D}', "KANGXI RADICAL INSECT"),
    ('\u{2F8E}', "KANGXI RADICAL BLOOD"),
    ('\u{2F8F}', "KANGXI RADICAL WALK ENCLOSURE"),
    ('\u{2F90}', "KANGXI RADICAL CLOTHES"),
    ('\u{2F91}', "KANGXI RADICAL WEST"),
    ('\u{2F92}', "KANGXI RADICAL SEE"),
    ('\u{2F93}', "KANGXI RADICAL HORN"),
    ('\u{2F94}', "KANGXI RADICAL SPEECH"),
    ('\u{2F95}', "KANGXI RADICAL VALLEY"),
    ('\u{2F96}', "KANGXI RADICAL BEAN"),
    ('\u{2F97}', "KANGXI RADICAL PIG"),
    ('\u{2F98}', "KANGXI RADICAL BADGER"),
    ('\u{2F99}', "KANGXI RADICAL SHELL"),
    ('\u{2F9A}', "KANGXI RADICAL RED"),
    ('\u{2F9B}', "KANGXI RADICAL RUN"),
    ('\u{2F9C}', "KANGXI RADICAL FOOT"),
    ('\u{2F9D}', "KANGXI RADICAL BODY"),
    ('\u{2F9E}', "KANGXI RADICAL CART"),
    ('\u{2F9F}', "KANGXI RADICAL BITTER"),
    ('\u{2FA0}', "KANGXI RADICAL MORNING"),
    ('\u{2FA1}', "KANGXI RADICAL WALK"),
    ('\u{2FA2}', "KANGXI RADICAL CITY"),
    ('\u{2FA3}', "KANGXI RADICAL WINE"),
    ('\u{2FA4}', "KANGXI RADICAL DISTINGUISH"),
    ('\u{2FA5}', "KANGXI RADICAL VILLAGE"),
    ('\u{2FA6}', "KANGXI RADICAL GOLD"),
    ('\u{2FA7}', "KANGXI RADICAL LONG"),
    ('\u{2FA8}', "KANGXI RADICAL GATE"),
    ('\u{2FA9}', "KANGXI RADICAL MOUND"),
    ('\u{2FAA}', "KANGXI RADICAL SLAVE"),
    ('\u{2FAB}', "KANGXI RADICAL SHORT TAILED BIRD"),
    ('\u{2FAC}', "KANGXI RADICAL RAIN"),
    ('\u{2FAD}', "KANGXI RADICAL BLUE"),
    ('\u{2FAE}', "KANGXI RADICAL WRONG"),
    ('\u{2FAF}', "KANGXI RADICAL FACE"),
    ('\u{2FB0}', "KANGXI RADICAL LEATHER"),
    ('\u{2FB1}', "KANGXI RADICAL TANNED LEATHER"),
    ('\u{2FB2}', "KANGXI RADICAL LEEK"),
    ('\u{2FB3}', "KANGXI RADICAL SOUND"),
    ('\u{2FB4}', "KANGXI RADICAL LEAF"),
    ('\u{2FB5}', "KANGXI RADICAL WIND"),
    ('\u{2FB6}', "KANGXI RADICAL FLY"),
    ('\u{2FB7}', "KANGXI RADICAL EAT"),
    ('\u{2FB8}', "KANGXI RADICAL HEAD"),
    ('\u{2FB9}', "KANGXI RADICAL FRAGRANT"),
    ('\u{2FBA}', "KANGXI RADICAL HORSE"),
    ('\u{2FBB}', "KANGXI RADICAL BONE"),
    ('\u{2FBC}', "KANGXI RADICAL TALL"),
    ('\u{2FBD}', "KANGXI RADICAL HAIR"),
    ('\u{2FBE}', "KANGXI RADICAL FIGHT"),
    ('\u{2FBF}', "KANGXI RADICAL SACRIFICIAL WINE"),
    ('\u{2FC0}', "KANGXI RADICAL CAULDRON"),
    ('\u{2FC1}', "KANGXI RADICAL GHOST"),
    ('\u{2FC2}', "KANGXI RADICAL FISH"),
    ('\u{2FC3}', "KANGXI RADICAL BIRD"),
    ('\u{2FC4}', "KANGXI RADICAL SALT"),
    ('\u{2FC5}', "KANGXI RADICAL DEER"),
    ('\u{2FC6}', "KANGXI RADICAL WHEAT"),
    ('\u{2FC7}', "KANGXI RADICAL HEMP"),
    ('\u{2FC8}', "KANGXI RADICAL YELLOW"),
    ('\u{2FC9}', "KANGXI RADICAL MILLET"),
    ('\u{2FCA}', "KANGXI RADICAL BLACK"),
    ('\u{2FCB}', "KANGXI RADICAL EMBROIDERY"),
    ('\u{2FCC}', "KANGXI RADICAL FROG"),
    ('\u{2FCD}', "KANGXI RADICAL TRIPOD"),
    ('\u{2FCE}', "KANGXI RADICAL DRUM"),
    ('\u{2FCF}', "KANGXI RADICAL RAT"),
    ('\u{2FD0}', "KANGXI RADICAL NOSE"),
    ('\u{2FD1}', "KANGXI RADICAL EVEN"),
    ('\u{2FD2}', "KANGXI RADICAL TOOTH"),
    ('\u{2FD3}', "KANGXI RADICAL DRAGON"),
    ('\u{2FD4}', "KANGXI RADICAL TURTLE"),
    ('\u{2FD5}', "KANGXI RADICAL FLUTE"),
    ('\u{3036}', "CIRCLED POSTAL MARK"),
    ('\u{3038}', "HANGZHOU NUMERAL TEN"),
    ('\u{3039}', "HANGZHOU NUMERAL TWENTY"),
    ('\u{303A}', "HANGZHOU NUMERAL THIRTY"),
    ('\u{309B}', "KATAKANA-HIRAGANA VOICED SOUND MARK"),
    ('\u{309C}', "KATAKANA-HIRAGANA SEMI-VOICED SOUND MARK"),
    ('\u{3131}', "HANGUL LETTER KIYEOK"),
    ('\u{3132}', "HANGUL LETTER SSANGKIYEOK"),
    ('\u{3133}', "HANGUL LETTER KIYEOK-SIOS"),
    ('\u{3134}', "HANGUL LETTER NIEUN"),
    ('\u{3135}', "HANGUL LETTER NIEUN-CIEUC"),
    ('\u{3136}', "HANGUL LETTER NIEUN-HIEUH"),
    ('\u{3137}', "HANGUL LETTER TIKEUT"),
    ('\u{3138}', "HANGUL LETTER SSANGTIKEUT"),
    ('\u{3139}', "HANGUL LETTER RIEUL"),
    ('\u{313A}', "HANGUL LETTER RIEUL-KIYEOK"),
    ('\u{313B}', "HANGUL LETTER RIEUL-MIEUM"),
    ('\u{313C}', "HANGUL LETTER RIEUL-PIEUP"),
    ('\u{313D}', "HANGUL LETTER RIEUL-SIOS"),
    ('\u{313E}', "HANGUL LETTER RIEUL-THIEUTH"),
    ('\u{313F}', "HANGUL LETTER RIEUL-PHIEUPH"),
    ('\u{3140}', "HANGUL LETTER RIEUL-HIEUH"),
    ('\u{3141}', "HANGUL LETTER MIEUM"),
    ('\u{3142}', "HANGUL LETTER PIEUP"),
    ('\u{3143}', "HANGUL LETTER SSANGPIEUP"),
    ('\u{3144}', "HANGUL LETTER PIEUP-SIOS"),
    ('\u{3145}', "HANGUL LETTER SIOS"),
    ('\u{3146}', "HANGUL LETTER SSANGSIOS"),
    ('\u{3147}', "HANGUL LETTER IEUNG"),
    ('\u{3148}', "HANGUL LETTER CIEUC"),
    ('\u{3149}', "HANGUL LETTER SSANGCIEUC"),
    ('\u{314A}', "HANGUL LETTER CHIEUCH"),
    ('\u{314B}', "HANGUL LETTER KHIEUKH"),
    ('\u{314C}', "HANGUL LETTER THIEUTH"),
    ('\u{314D}', "HANGUL LETTER PHIEUPH"),
    ('\u{314E}', "HANGUL LETTER HIEUH"),
    ('\u{314F}', "HANGUL LETTER A"),
    ('\u{3150}', "HANGUL LETTER AE"),
    ('\u{3151}', "HANGUL LETTER YA"),
    ('\u{3152}', "HANGUL LETTER YAE"),
    ('\u{3153}', "HANGUL LETTER EO"),
    ('\u{3154}', "HANGUL LETTER E"),
    ('\u{3155}', "HANGUL LETTER YEO"),
    ('\u{3156}', "HANGUL LETTER YE"),
    ('\u{3157}', "HANGUL LETTER O"),
    ('\u{3158}', "HANGUL LETTER WA"),
    ('\u{3159}', "HANGUL LETTER WAE"),
    ('\u{315A}', "HANGUL LETTER OE"),
    ('\u{315B}', "HANGUL LETTER YO"),
    ('\u{315C}', "HANGUL LETTER U"),
    ('\u{315D}', "HANGUL LETTER WEO"),
    ('\u{315E}', "HANGUL LETTER WE"),
    ('\u{315F}', "HANGUL LETTER WI"),
    ('\u{3160}', "HANGUL LETTER YU"),
    ('\u{3161}', "HANGUL LETTER EU"),
    ('\u{3162}', "HANGUL LETTER YI"),
    ('\u{3163}', "HANGUL LETTER I"),
    ('\u{3164}', "HANGUL FILLER"),
    ('\u{3165}', "HANGUL LETTER SSANGNIEUN"),
    ('\u{3166}', "HANGUL LETTER NIEUN-TIKEUT"),
    ('\u{3167}', "HANGUL LETTER NIEUN-SIOS"),
    ('\u{3168}', "HANGUL LETTER NIEUN-PANSIOS"),
    ('\u{3169}', "HANGUL LETTER RIEUL-KIYEOK-SIOS"),
    ('\u{316A}', "HANGUL LETTER RIEUL-TIKEUT"),
    ('\u{316B}', "HANGUL LETTER RIEUL-PIEUP-SIOS"),
    ('\u{316C}', "HANGUL LETTER RIEUL-PANSIOS"),
    ('\u{316D}', "HANGUL LETTER RIEUL-YEORINHIEUH"),
    ('\u{316E}', "HANGUL LETTER MIEUM-PIEUP"),
    ('\u{316F}', "HANGUL LETTER MIEUM-SIOS"),
    ('\u{3170}', "HANGUL LETTER MIEUM-PANSIOS"),
    ('\u{3171}', "HANGUL LETTER KAPYEOUNMIEUM"),
    ('\u{3172}', "HANGUL LETTER PIEUP-KIYEOK"),
    ('\u{3173}', "HANGUL LETTER PIEUP-TIKEUT"),
    ('\u{3174}', "HANGUL LETTER PIEUP-SIOS-KIYEOK"),
    ('\u{3175}', "HANGUL LETTER PIEUP-SIOS-TIKEUT"),
    ('\u{3176}', "HANGUL LETTER PIEUP-CIEUC"),
    ('\u{3177}', "HANGUL LETTER PIEUP-THIEUTH"),
    ('\u{3178}', "HANGUL LETTER KAPYEOUNPIEUP"),
    ('\u{3179}', "HANGUL LETTER KAPYEOUNSSANGPIEUP"),
    ('\u{317A}', "HANGUL LETTER SIOS-KIYEOK"),
    ('\u{317B}', "HANGUL LETTER SIOS-NIEUN"),
    ('\u{317C}', "HANGUL LETTER SIOS-TIKEUT"),
    ('\u{317D}', "HANGUL LETTER SIOS-PIEUP"),
    ('\u{317E}', "HANGUL LETTER SIOS-CIEUC"),
    ('\u{317F}', "HANGUL LETTER PANSIOS"),
    ('\u{3180}', "HANGUL LETTER SSANGIEUNG"),
    ('\u{3181}', "HANGUL LETTER YESIEUNG"),
    ('\u{3182}', "HANGUL LETTER YESIEUNG-SIOS"),
    ('\u{3183}', "HANGUL LETTER YESIEUNG-PANSIOS"),
    ('\u{3184}', "HANGUL LETTER KAPYEOUNPHIEUPH"),
    ('\u{3185}', "HANGUL LETTER SSANGHIEUH"),
    ('\u{3186}', "HANGUL LETTER YEORINHIEUH"),
    ('\u{3187}', "HANGUL LETTER YO-YA"),
    ('\u{3188}', "HANGUL LETTER YO-YAE"),
    ('\u{3189}', "HANGUL LETTER YO-I"),
    ('\u{318A}', "HANGUL LETTER YU-YEO"),
    ('\u{318B}', "HANGUL LETTER YU-YE"),
    ('\u{318C}', "HANGUL LETTER YU-I"),
    ('\u{318D}', "HANGUL LETTER ARAEA"),
    ('\u{318E}', "HANGUL LETTER ARAEAE"),
    ('\u{3200}', "PARENTHESIZED HANGUL KIYEOK"),
    ('\u{3201}', "PARENTHESIZED HANGUL NIEUN"),
    ('\u{3202}', "PARENTHESIZED HANGUL TIKEUT"),
    ('\u{3203}', "PARENTHESIZED HANGUL RIEUL"),
    ('\u{3204}', "PARENTHESIZED HANGUL MIEUM"),
    ('\u{3205}', "PARENTHESIZED HANGUL PIEUP"),
    ('\u{3206}', "PARENTHESIZED HANGUL SIOS"),
    ('\u{3207}', "PARENTHESIZED HANGUL IEUNG"),
    ('\u{3208}', "PARENTHESIZED HANGUL CIEUC"),
    ('\u{3209}', "PARENTHESIZED HANGUL CHIEUCH"),
    ('\u{320A}', "PARENTHESIZED HANGUL KHIEUKH"),
    ('\u{320B}', "PARENTHESIZED HANGUL THIEUTH"),
    ('\u{320C}', "PARENTHESIZED HANGUL PHIEUPH"),
    ('\u{320D}', "PARENTHESIZED HANGUL HIEUH"),
    ('\u{320E}', "PARENTHESIZED HANGUL KIYEOK A"),
    ('\u{320F}', "PARENTHESIZED HANGUL NIEUN A"),
    ('\u{3210}', "PARENTHESIZED HANGUL TIKEUT A"),
    ('\u{3211}', "PARENTHESIZED HANGUL RIEUL A"),
    ('\u{3212}', "PARENTHESIZED HANGUL MIEUM A"),
    ('\u{3213}', "PARENTHESIZED HANGUL PIEUP A"),
    ('\u{3214}', "PARENTHESIZED HANGUL SIOS A"),
    ('\u{3215}', "PARENTHESIZED HANGUL IEUNG A"),
    ('\u{3216}', "PARENTHESIZED HANGUL CIEUC A"),
    ('\u{3217}', "PARENTHESIZED HANGUL CHIEUCH A"),
    ('\u{3218}', "PARENTHESIZED HANGUL KHIEUKH A"),
    ('\u{3219}', "PARENTHESIZED HANGUL THIEUTH A"),
    ('\u{321A}', "PARENTHESIZED HANGUL PHIEUPH A"),
    ('\u{321B}', "PARENTHESIZED HANGUL HIEUH A"),
    ('\u{321C}', "PARENTHESIZED HANGUL CIEUC U"),
    ('\u{321D}', "PARENTHESIZED KOREAN CHARACTER OJEON"),
    ('\u{321E}', "PARENTHESIZED KOREAN CHARACTER O HU"),
    ('\u{3220}', "PARENTHESIZED IDEOGRAPH ONE"),
    ('\u{3221}', "PARENTHESIZED IDEOGRAPH TWO"),
    ('\u{3222}', "PARENTHESIZED IDEOGRAPH THREE"),
    ('\u{3223}', "PARENTHESIZED IDEOGRAPH FOUR"),
    ('\u{3224}', "PARENTHESIZED IDEOGRAPH FIVE"),
    ('\u{3225}', "PARENTHESIZED IDEOGRAPH SIX"),
    ('\u{3226}', "PARENTHESIZED IDEOGRAPH SEVEN"),
    ('\u{3227}', "PARENTHESIZED IDEOGRAPH EIGHT"),
    ('\u{3228}', "PARENTHESIZED IDEOGRAPH NINE"),
    ('\u{3229}', "PARENTHESIZED IDEOGRAPH TEN"),
    ('\u{322A}', "PARENTHESIZED IDEOGRAPH MOON"),
    ('\u{322B}', "PARENTHESIZED IDEOGRAPH FIRE"),
    ('\u{322C}', "PARENTHESIZED IDEOGRAPH WATER"),
    ('\u{322D}', "PARENTHESIZED IDEOGRAPH WOOD"),
    ('\u{322E}', "PARENTHESIZED IDEOGRAPH METAL"),
    ('\u{322F}', "PARENTHESIZED IDEOGRAPH EARTH"),
    ('\u{3230}', "PARENTHESIZED IDEOGRAPH SUN"),
    ('\u{3231}', "PARENTHESIZED IDEOGRAPH STOCK"),
    ('\u{3232}', "PARENTHESIZED IDEOGRAPH HAVE"),
    ('\u{3233}', "PARENTHESIZED IDEOGRAPH SOCIETY"),
    ('\u{3234}', "PARENTHESIZED IDEOGRAPH NAME"),
    ('\u{3235}', "PARENTHESIZED IDEOGRAPH SPECIAL"),
    ('\u{3236}', "PARENTHESIZED IDEOGRAPH FINANCIAL"),
    ('\u{3237}', "PARENTHESIZED IDEOGRAPH CONGRATULATION"),
    ('\u{3238}', "PARENTHESIZED IDEOGRAPH LABOR"),
    ('\u{3239}', "PARENTHESIZED IDEOGRAPH REPRESENT"),
    ('\u{323A}', "PARENTHESIZED IDEOGRAPH CALL"),
    ('\u{323B}', "PARENTHESIZED IDEOGRAPH STUDY"),
    ('\u{323C}', "PARENTHESIZED IDEOGRAPH SUPERVISE"),
    ('\u{323D}', "PARENTHESIZED IDEOGRAPH ENTERPRISE"),
    ('\u{323E}', "PARENTHESIZED IDEOGRAPH RESOURCE"),
    ('\u{323F}', "PARENTHESIZED IDEOGRAPH ALLIANCE"),
    ('\u{3240}', "PARENTHESIZED IDEOGRAPH FESTIVAL"),
    ('\u{3241}', "PARENTHESIZED IDEOGRAPH REST"),
    ('\u{3242}', "PARENTHESIZED IDEOGRAPH SELF"),
    ('\u{3243}', "PARENTHESIZED IDEOGRAPH REACH"),
    ('\u{32C0}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JANUARY"),
    ('\u{32C1}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR FEBRUARY"),
    ('\u{32C2}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR MARCH"),
    ('\u{32C3}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR APRIL"),
    ('\u{32C4}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR MAY"),
    ('\u{32C5}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JUNE"),
    ('\u{32C6}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR JULY"),
    ('\u{32C7}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR AUGUST"),
    ('\u{32C8}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR SEPTEMBER"),
    ('\u{32C9}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR OCTOBER"),
    ('\u{32CA}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR NOVEMBER"),
    ('\u{32CB}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DECEMBER"),
    ('\u{3358}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ZERO"),
    ('\u{3359}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ONE"),
    ('\u{335A}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWO"),
    ('\u{335B}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR THREE"),
    ('\u{335C}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FOUR"),
    ('\u{335D}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FIVE"),
    ('\u{335E}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SIX"),
    ('\u{335F}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SEVEN"),
    ('\u{3360}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR EIGHT"),
    ('\u{3361}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR NINE"),
    ('\u{3362}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TEN"),
    ('\u{3363}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR ELEVEN"),
    ('\u{3364}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWELVE"),
    ('\u{3365}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR THIRTEEN"),
    ('\u{3366}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FOURTEEN"),
    ('\u{3367}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR FIFTEEN"),
    ('\u{3368}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SIXTEEN"),
    ('\u{3369}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR SEVENTEEN"),
    ('\u{336A}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR EIGHTEEN"),
    ('\u{336B}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR NINETEEN"),
    ('\u{336C}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY"),
    ('\u{336D}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-ONE"),
    ('\u{336E}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-TWO"),
    ('\u{336F}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-THREE"),
    ('\u{3370}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR HOUR TWENTY-FOUR"),
    ('\u{33E0}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY ONE"),
    ('\u{33E1}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWO"),
    ('\u{33E2}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THREE"),
    ('\u{33E3}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FOUR"),
    ('\u{33E4}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FIVE"),
    ('\u{33E5}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SIX"),
    ('\u{33E6}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SEVEN"),
    ('\u{33E7}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY EIGHT"),
    ('\u{33E8}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY NINE"),
    ('\u{33E9}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TEN"),
    ('\u{33EA}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY ELEVEN"),
    ('\u{33EB}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWELVE"),
    ('\u{33EC}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTEEN"),
    ('\u{33ED}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FOURTEEN"),
    ('\u{33EE}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY FIFTEEN"),
    ('\u{33EF}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SIXTEEN"),
    ('\u{33F0}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY SEVENTEEN"),
    ('\u{33F1}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY EIGHTEEN"),
    ('\u{33F2}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY NINETEEN"),
    ('\u{33F3}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY"),
    ('\u{33F4}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-ONE"),
    ('\u{33F5}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-TWO"),
    ('\u{33F6}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-THREE"),
    ('\u{33F7}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-FOUR"),
    ('\u{33F8}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-FIVE"),
    ('\u{33F9}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-SIX"),
    ('\u{33FA}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-SEVEN"),
    ('\u{33FB}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-EIGHT"),
    ('\u{33FC}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY TWENTY-NINE"),
    ('\u{33FD}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTY"),
    ('\u{33FE}', "IDEOGRAPHIC TELEGRAPH SYMBOL FOR DAY THIRTY-ONE"),
    ('\u{AB65}', "GREEK LETTER SMALL CAPITAL OMEGA"),
    ('\u{FB00}', "LATIN SMALL LIGATURE FF"),
    ('\u{FB01}', "LATIN SMALL LIGATURE FI"),
    ('\u{FB02}', "LATIN SMALL LIGATURE FL"),
    ('\u{FB03}', "LATIN SMALL LIGATURE FFI"),
    ('\u{FB04}', "LATIN SMALL LIGATURE FFL"),
    ('\u{FB05}', "LATIN SMALL LIGATURE LONG S T"),
    ('\u{FB06}', "LATIN SMALL LIGATURE ST"),
    ('\u{FB13}', "ARMENIAN SMALL LIGATURE MEN NOW"),
    ('\u{FB14}', "ARMENIAN SMALL LIGATURE MEN ECH"),
    ('\u{FB15}', "ARMENIAN SMALL LIGATURE MEN INI"),
    ('\u{FB16}', "ARMENIAN SMALL LIGATURE VEW NOW"),
    ('\u{FB17}', "ARMENIAN SMALL LIGATURE MEN XEH"),
    ('\u{FB20}', "HEBREW LETTER ALTERNATIVE AYIN"),
    ('\u{FB21}', "HEBREW LETTER WIDE ALEF"),
    ('\u{FB22}', "HEBREW LETTER WIDE DALET"),
    ('\u{FB23}', "HEBREW LETTER WIDE HE"),
    ('\u{FB24}', "HEBREW LETTER WIDE KAF"),
    ('\u{FB25}', "HEBREW LETTER WIDE LAMED"),
    ('\u{FB26}', "HEBREW LETTER WIDE FINAL MEM"),
    ('\u{FB27}', "HEBREW LETTER WIDE RESH"),
    ('\u{FB28}', "HEBREW LETTER WIDE TAV"),
    ('\u{FB29}', "HEBREW LETTER ALTERNATIVE PLUS SIGN"),
    ('\u{FB4F}', "HEBREW LIGATURE ALEF LAMED"),
    ('\u{FE49}', "DASHED OVERLINE"),
    ('\u{FE4A}', "CENTRELINE OVERLINE"),
    ('\u{FE4B}', "WAVY OVERLINE"),
    ('\u{FE4C}', "DOUBLE WAVY OVERLINE"),
    ('\u{FE4D}', "DASHED LOW LINE"),
    ('\u{FE4E}', "CENTRELINE LOW LINE"),
    ('\u{FE4F}', "WAVY LOW LINE"),
    ('\u{10140}', "GREEK ACROPHONIC ATTIC ONE QUARTER"),
    ('\u{10141}', "GREEK ACROPHONIC ATTIC ONE HALF"),
    ('\u{10142}', "GREEK ACROPHONIC ATTIC ONE DRACHMA"),
    ('\u{10143}', "GREEK ACROPHONIC ATTIC FIVE"),
    ('\u{10144}', "GREEK ACROPHONIC ATTIC FIFTY"),
    ('\u{10145}', "GREEK ACROPHONIC ATTIC FIVE HUNDRED"),
    ('\u{10146}', "GREEK ACROPHONIC ATTIC FIVE THOUSAND"),
    ('\u{10147}', "GREEK ACROPHONIC ATTIC FIFTY THOUSAND"),
    ('\u{10148}', "GREEK ACROPHONIC ATTIC FIVE TALENTS"),
    ('\u{10149}', "GREEK ACROPHONIC ATTIC TEN TALENTS"),
    ('\u{1014A}', "GREEK ACROPHONIC ATTIC FIFTY TALENTS"),
    ('\u{1014B}', "GREEK ACROPHONIC ATTIC ONE HUNDRED TALENTS"),
    ('\u{1014C}', "GREEK ACROPHONIC ATTIC FIVE HUNDRED TALENTS"),
    ('\u{1014D}', "GREEK ACROPHONIC ATTIC ONE THOUSAND TALENTS"),
    ('\u{1014E}', "GREEK ACROPHONIC ATTIC FIVE THOUSAND TALENTS"),
    ('\u{1014F}', "GREEK ACROPHONIC ATTIC FIVE STATERS"),
    ('\u{10150}', "GREEK ACROPHONIC ATTIC TEN STATERS"),
    ('\u{10151}', "GREEK ACROPHONIC ATTIC FIFTY STATERS"),
    ('\u{10152}', "GREEK ACROPHONIC ATTIC ONE HUNDRED STATERS"),
    ('\u{10153}', "GREEK ACROPHONIC ATTIC FIVE HUNDRED STATERS"),
    ('\u{10154}', "GREEK ACROPHONIC ATTIC ONE THOUSAND STATERS"),
    ('\u{10155}', "GREEK ACROPHONIC ATTIC TEN THOUSAND STATERS"),
    ('\u{10156}', "GREEK ACROPHONIC ATTIC FIFTY THOUSAND STATERS"),
    ('\u{10157}', "GREEK ACROPHONIC ATTIC TEN MNAS"),
    ('\u{10158}', "GREEK ACROPHONIC HERAEUM ONE PLETHRON"),
    ('\u{10159}', "GREEK ACROPHONIC THESPIAN ONE"),
    ('\u{1015A}', "GREEK ACROPHONIC HERMIONIAN ONE"),
    ('\u{1015B}', "GREEK ACROPHONIC EPIDAUREAN TWO"),
    ('\u{1015C}', "GREEK ACROPHONIC THESPIAN TWO"),
    ('\u{1015D}', "GREEK ACROPHONIC CYRENAIC TWO DRACHMAS"),
    ('\u{1015E}', "GREEK ACROPHONIC EPIDAUREAN TWO DRACHMAS"),
    ('\u{1015F}', "GREEK ACROPHONIC TROEZENIAN FIVE"),
    ('\u{10160}', "GREEK ACROPHONIC TROEZENIAN TEN"),
    ('\u{10161}', "GREEK ACROPHONIC TROEZENIAN TEN ALTERNATE FORM"),
    ('\u{10162}', "GREEK ACROPHONIC HERMIONIAN TEN"),
    ('\u{10163}', "GREEK ACROPHONIC MESSENIAN TEN"),
    ('\u{10164}', "GREEK ACROPHONIC THESPIAN TEN"),
    ('\u{10165}', "GREEK ACROPHONIC THESPIAN THIRTY"),
    ('\u{10166}', "GREEK ACROPHONIC TROEZENIAN FIFTY"),
    ('\u{10167}', "GREEK ACROPHONIC TROEZENIAN FIFTY ALTERNATE FORM"),
    ('\u{10168}', "GREEK ACROPHONIC HERMIONIAN FIFTY"),
    ('\u{10169}', "GREEK ACROPHONIC THESPIAN FIFTY"),
    ('\u{1016A}', "GREEK ACROPHONIC THESPIAN ONE HUNDRED"),
    ('\u{1016B}', "GREEK ACROPHONIC THESPIAN THREE HUNDRED"),
    ('\u{1016C}', "GREEK ACROPHONIC EPIDAUREAN FIVE HUNDRED"),
    ('\u{1016D}', "GREEK ACROPHONIC TROEZENIAN FIVE HUNDRED"),
    ('\u{1016E}', "GREEK ACROPHONIC THESPIAN FIVE HUNDRED"),
    ('\u{1016F}', "GREEK ACROPHONIC CARYSTIAN FIVE HUNDRED"),
    ('\u{10170}', "GREEK ACROPHONIC NAXIAN FIVE HUNDRED"),
    ('\u{10171}', "GREEK ACROPHONIC THESPIAN ONE THOUSAND"),
    ('\u{10172}', "GREEK ACROPHONIC THESPIAN FIVE THOUSAND"),
    ('\u{10173}', "GREEK ACROPHONIC DELPHIC FIVE MNAS"),
    ('\u{10174}', "GREEK ACROPHONIC STRATIAN FIFTY MNAS"),
    ('\u{10175}', "GREEK ONE HALF SIGN"),
    ('\u{10176}', "GREEK ONE HALF SIGN ALTERNATE FORM"),
    ('\u{10177}', "GREEK TWO THIRDS SIGN"),
    ('\u{10178}', "GREEK THREE QUARTERS SIGN"),
    ('\u{10179}', "GREEK YEAR SIGN"),
    ('\u{1017A}', "GREEK TALENT SIGN"),
    ('\u{1017B}', "GREEK DRACHMA SIGN"),
    ('\u{1017C}', "GREEK OBOL SIGN"),
    ('\u{1017D}', "GREEK TWO OBOLS SIGN"),
    ('\u{1017E}', "GREEK THREE OBOLS SIGN"),
    ('\u{1017F}', "GREEK FOUR OBOLS SIGN"),
    ('\u{10180}', "GREEK FIVE OBOLS SIGN"),
    ('\u{10181}', "GREEK METRETES SIGN"),
    ('\u{10182}', "GREEK KYATHOS BASE SIGN"),
    ('\u{10183}', "GREEK LITRA SIGN"),
    ('\u{10184}', "GREEK OUNKIA SIGN"),
    ('\u{10185}', "GREEK XESTES SIGN"),
    ('\u{10186}', "GREEK ARTABE SIGN"),
    ('\u{10187}', "GREEK AROURA SIGN"),
    ('\u{10188}', "GREEK GRAMMA SIGN"),
    ('\u{10189}', "GREEK TRYBLION BASE SIGN"),
    ('\u{1018A}', "GREEK ZERO SIGN"),
    ('\u{1018B}', "GREEK ONE QUARTER SIGN"),
    ('\u{1018C}', "GREEK SINUSOID SIGN"),
    ('\u{1018D}', "GREEK INDICTION SIGN"),
    ('\u{101A0}', "GREEK SYMBOL TAU RHO"),
    ('\u{1D200}', "GREEK VOCAL NOTATION SYMBOL-1"),
    ('\u{1D201}', "GREEK VOCAL NOTATION SYMBOL-2"),
    ('\u{1D202}', "GREEK VOCAL NOTATION SYMBOL-3"),
    ('\u{1D203}', "GREEK VOCAL NOTATION SYMBOL-4"),
    ('\u{1D204}', "GREEK VOCAL NOTATION SYMBOL-5"),
    ('\u{1D205}', "GREEK VOCAL NOTATION SYMBOL-6"),
    ('\u{1D206}', "GREEK VOCAL NOTATION SYMBOL-7"),
    ('\u{1D207}', "GREEK VOCAL NOTATION SYMBOL-8"),
    ('\u{1D208}', "GREEK VOCAL NOTATION SYMBOL-9"),
    ('\u{1D209}', "GREEK VOCAL NOTATION SYMBOL-10"),
    ('\u{1D20A}', "GREEK VOCAL NOTATION SYMBOL-11"),
    ('\u{1D20B}', "GREEK VOCAL NOTATION SYMBOL-12"),
    ('\u{1D20C}', "GREEK VOCAL NOTATION SYMBOL-13"),
    ('\u{1D20D}', "GREEK VOCAL NOTATION SYMBOL-14"),
    ('\u{1D20E}', "GREEK VOCAL NOTATION SYMBOL-15"),
    ('\u{1D20F}', "GREEK VOCAL NOTATION SYMBOL-16"),
    ('\u{1D210}', "GREEK VOCAL NOTATION SYMBOL-17"),
    ('\u{1D211}', "GREEK VOCAL NOTATION SYMBOL-18"),
    ('\u{1D212}', "GREEK VOCAL NOTATION SYMBOL-19"),
    ('\u{1D213}', "GREEK VOCAL NOTATION SYMBOL-20"),
    ('\u{1D214}', "GREEK VOCAL NOTATION SYMBOL-21"),
    ('\u{1D215}', "GREEK VOCAL NOTATION SYMBOL-22"),
    ('\u{1D216}', "GREEK VOCAL NOTATION SYMBOL-23"),
    ('\u{1D217}', "GREEK VOCAL NOTATION SYMBOL-24"),
    ('\u{1D218}', "GREEK VOCAL NOTATION SYMBOL-50"),
    ('\u{1D219}', "GREEK VOCAL NOTATION SYMBOL-51"),
    ('\u{1D21A}', "GREEK VOCAL NOTATION SYMBOL-52"),
    ('\u{1D21B}', "GREEK VOCAL NOTATION SYMBOL-53"),
    ('\u{1D21C}', "GREEK VOCAL NOTATION SYMBOL-54"),
    ('\u{1D21D}', "GREEK INSTRUMENTAL NOTATION SYMBOL-1"),
    ('\u{1D21E}', "GREEK INSTRUMENTAL NOTATION SYMBOL-2"),
    ('\u{1D21F}', "GREEK INSTRUMENTAL NOTATION SYMBOL-4"),
    ('\u{1D220}', "GREEK INSTRUMENTAL NOTATION SYMBOL-5"),
    ('\u{1D221}', "GREEK INSTRUMENTAL NOTATION SYMBOL-7"),
    ('\u{1D222}', "GREEK INSTRUMENTAL NOTATION SYMBOL-8"),
    ('\u{1D223}', "GREEK INSTRUMENTAL NOTATION SYMBOL-11"),
    ('\u{1D224}', "GREEK INSTRUMENTAL NOTATION SYMBOL-12"),
    ('\u{1D225}', "GREEK INSTRUMENTAL NOTATION SYMBOL-13"),
    ('\u{1D226}', "GREEK INSTRUMENTAL NOTATION SYMBOL-14"),
    ('\u{1D227}', "GREEK INSTRUMENTAL NOTATION SYMBOL-17"),
    ('\u{1D228}', "GREEK INSTRUMENTAL NOTATION SYMBOL-18"),
    ('\u{1D229}', "GREEK INSTRUMENTAL NOTATION SYMBOL-19"),
    ('\u{1D22A}', "GREEK INSTRUMENTAL NOTATION SYMBOL-23"),
    ('\u{1D22B}', "GREEK INSTRUMENTAL NOTATION SYMBOL-24"),
    ('\u{1D22C}', "GREEK INSTRUMENTAL NOTATION SYMBOL-25"),
    ('\u{1D22D}', "GREEK INSTRUMENTAL NOTATION SYMBOL-26"),
    ('\u{1D22E}', "GREEK INSTRUMENTAL NOTATION SYMBOL-27"),
    ('\u{1D22F}', "GREEK INSTRUMENTAL NOTATION SYMBOL-29"),
    ('\u{1D230}', "GREEK INSTRUMENTAL NOTATION SYMBOL-30"),
    ('\u{1D231}', "GREEK INSTRUMENTAL NOTATION SYMBOL-32"),
    ('\u{1D232}', "GREEK INSTRUMENTAL NOTATION SYMBOL-36"),
    ('\u{1D233}', "GREEK INSTRUMENTAL NOTATION SYMBOL-37"),
    ('\u{1D234}', "GREEK INSTRUMENTAL NOTATION SYMBOL-38"),
    ('\u{1D235}', "GREEK INSTRUMENTAL NOTATION SYMBOL-39"),
    ('\u{1D236}', "GREEK INSTRUMENTAL NOTATION SYMBOL-40"),
    ('\u{1D237}', "GREEK INSTRUMENTAL NOTATION SYMBOL-42"),
    ('\u{1D238}', "GREEK INSTRUMENTAL NOTATION SYMBOL-43"),
    ('\u{1D239}', "GREEK INSTRUMENTAL NOTATION SYMBOL-45"),
    ('\u{1D23A}', "GREEK INSTRUMENTAL NOTATION SYMBOL-47"),
    ('\u{1D23B}', "GREEK INSTRUMENTAL NOTATION SYMBOL-48"),
    ('\u{1D23C}', "GREEK INSTRUMENTAL NOTATION SYMBOL-49"),
    ('\u{1D23D}', "GREEK INSTRUMENTAL NOTATION SYMBOL-50"),
    ('\u{1D23E}', "GREEK INSTRUMENTAL NOTATION SYMBOL-51"),
    ('\u{1D23F}', "GREEK INSTRUMENTAL NOTATION SYMBOL-52"),
    ('\u{1D240}', "GREEK INSTRUMENTAL NOTATION SYMBOL-53"),
    ('\u{1D241}', "GREEK INSTRUMENTAL NOTATION SYMBOL-54"),
    ('\u{1D245}', "GREEK MUSICAL LEIMMA"),
    ('\u{1D400}', "MATHEMATICAL BOLD CAPITAL A"),
    ('\u{1D401}', "MATHEMATICAL BOLD CAPITAL B"),
    ('\u{1D402}', "MATHEMATICAL BOLD CAPITAL C"),
    ('\u{1D403}', "MATHEMATICAL BOLD CAPITAL D"),
    ('\u{1D404}', "MATHEMATICAL BOLD CAPITAL E"),
    ('\u{1D405}', "MATHEMATICAL BOLD CAPITAL F"),
    ('\u{1D406}', "MATHEMATICAL BOLD CAPITAL G"),
    ('\u{1D407}', "MATHEMATICAL BOLD CAPITAL H"),
    ('\u{1D408}', "MATHEMATICAL BOLD CAPITAL I"),
    ('\u{1D409}', "MATHEMATICAL BOLD CAPITAL J"),
    ('\u{1D40A}', "MATHEMATICAL BOLD CAPITAL K"),
    ('\u{1D40B}', "MATHEMATICAL BOLD CAPITAL L"),
    ('\u{1D40C}', "MATHEMATICAL BOLD CAPITAL M"),
    ('\u{1D40D}', "MATHEMATICAL BOLD CAPITAL N"),
    ('\u{1D40E}', "MATHEMATICAL BOLD CAPITAL O"),
    ('\u{1D40F}', "MATHEMATICAL BOLD CAPITAL P"),
    ('\u{1D410}', "MATHEMATICAL BOLD CAPITAL Q"),
    ('\u{1D411}', "MATHEMATICAL BOLD CAPITAL R"),
    ('\u{1D412}', "MATHEMATICAL BOLD CAPITAL S"),
    ('\u{1D413}', "MATHEMATICAL BOLD CAPITAL T"),
    ('\u{1D414}', "MATHEMATICAL BOLD CAPITAL U"),
    ('\u{1D415}', "MATHEMATICAL BOLD CAPITAL V"),
    ('\u{1D416}', "MATHEMATICAL BOLD CAPITAL W"),
    ('\u{1D417}', "MATHEMATICAL BOLD CAPITAL X"),
    ('\u{1D418}', "MATHEMATICAL BOLD CAPITAL Y"),
    ('\u{1D419}', "MATHEMATICAL BOLD CAPITAL Z"),
    ('\u{1D41A}', "MATHEMATICAL BOLD SMALL A"),
    ('\u{1D41B}', "MATHEMATICAL BOLD SMALL B"),
    ('\u{1D41C}', "MATHEMATICAL BOLD SMALL C"),
    ('\u{1D41D}', "MATHEMATICAL BOLD SMALL D"),
    ('\u{1D41E}', "MATHEMATICAL BOLD SMALL E"),
    ('\u{1D41F}', "MATHEMATICAL BOLD SMALL F"),
    ('\u{1D420}', "MATHEMATICAL BOLD SMALL G"),
    ('\u{1D421}', "MATHEMATICAL BOLD SMALL H"),
    ('\u{1D422}', "MATHEMATICAL BOLD SMALL I"),
    ('\u{1D423}', "MATHEMATICAL BOLD SMALL J"),
    ('\u{1D424}', "MATHEMATICAL BOLD SMALL K"),
    ('\u{1D425}', "MATHEMATICAL BOLD SMALL L"),
    ('\u{1D426}', "MATHEMATICAL BOLD SMALL M"),
    ('\u{1D427}', "MATHEMATICAL BOLD SMALL N"),
    ('\u{1D428}', "MATHEMATICAL BOLD SMALL O"),
    ('\u{1D429}', "MATHEMATICAL BOLD SMALL P"),
    ('\u{1D42A}', "MATHEMATICAL BOLD SMALL Q"),
    ('\u{1D42B}', "MATHEMATICAL BOLD SMALL R"),
    ('\u{1D42C}', "MATHEMATICAL BOLD SMALL S"),
    ('\u{1D42D}', "MATHEMATICAL BOLD SMALL T"),
    ('\u{1D42E}', "MATHEMATICAL BOLD SMALL U"),
    ('\u{1D42F}', "MATHEMATICAL BOLD SMALL V"),
    ('\u{1D430}', "MATHEMATICAL BOLD SMALL W"),
    ('\u{1D431}', "MATHEMATICAL BOLD SMALL X"),
    ('\u{1D432}', "MATHEMATICAL BOLD SMALL Y"),
    ('\u{1D433}', "MATHEMATICAL BOLD SMALL Z"),
    ('\u{1D434}', "MATHEMATICAL ITALIC CAPITAL A"),
    ('\u{1D435}', "MATHEMATICAL ITALIC CAPITAL B"),
    ('\u{1D436}', "MATHEMATICAL ITALIC CAPITAL C"),
    ('\u{1D437}', "MATHEMATICAL ITALIC CAPITAL D"),
    ('\u{1D438}', "MATHEMATICAL ITALIC CAPITAL E"),
    ('\u{1D439}', "MATHEMATICAL ITALIC CAPITAL F"),
    ('\u{1D43A}', "MATHEMATICAL ITALIC CAPITAL G"),
    ('\u{1D43B}', "MATHEMATICAL ITALIC CAPITAL H"),
    ('\u{1D43C}', "MATHEMATICAL ITALIC CAPITAL I"),
    ('\u{1D43D}', "MATHEMATICAL ITALIC CAPITAL J"),
    ('\u{1D43E}', "MATHEMATICAL ITALIC CAPITAL K"),
    ('\u{1D43F}', "MATHEMATICAL ITALIC CAPITAL L"),
    ('\u{1D440}', "MATHEMATICAL ITALIC CAPITAL M"),
    ('\u{1D441}', "MATHEMATICAL ITALIC CAPITAL N"),
    ('\u{1D442}', "MATHEMATICAL ITALIC CAPITAL O"),
    ('\u{1D443}', "MATHEMATICAL ITALIC CAPITAL P"),
    ('\u{1D444}', "MATHEMATICAL ITALIC CAPITAL Q"),
    ('\u{1D445}', "MATHEMATICAL ITALIC CAPITAL R"),
    ('\u{1D446}', "MATHEMATICAL ITALIC CAPITAL S"),
    ('\u{1D447}', "MATHEMATICAL ITALIC CAPITAL T"),
    ('\u{1D448}', "MATHEMATICAL ITALIC CAPITAL U"),
    ('\u{1D449}', "MATHEMATICAL ITALIC CAPITAL V"),
    ('\u{1D44A}', "MATHEMATICAL ITALIC CAPITAL W"),
    ('\u{1D44B}', "MATHEMATICAL ITALIC CAPITAL X"),
    ('\u{1D44C}', "MATHEMATICAL ITALIC CAPITAL Y"),
    ('\u{1D44D}', "MATHEMATICAL ITALIC CAPITAL Z"),
    ('\u{1D44E}', "MATHEMATICAL ITALIC SMALL A"),
    ('\u{1D44F}', "MATHEMATICAL ITALIC SMALL B"),
    ('\u{1D450}', "MATHEMATICAL ITALIC SMALL C"),
    ('\u{1D451}', "MATHEMATICAL ITALIC SMALL D"),
    ('\u{1D452}', "MATHEMATICAL ITALIC SMALL E"),
    ('\u{1D453}', "MATHEMATICAL ITALIC SMALL F"),
    ('\u{1D454}', "MATHEMATICAL ITALIC SMALL G"),
    ('\u{1D456}', "MATHEMATICAL ITALIC SMALL I"),
    ('\u{1D457}', "MATHEMATICAL ITALIC SMALL J"),
    ('\u{1D458}', "MATHEMATICAL ITALIC SMALL K"),
    ('\u{1D459}', "MATHEMATICAL ITALIC SMALL L"),
    ('\u{1D45A}', "MATHEMATICAL ITALIC SMALL M"),
    ('\u{1D45B}', "MATHEMATICAL ITALIC SMALL N"),
    ('\u{1D45C}', "MATHEMATICAL ITALIC SMALL O"),
    ('\u{1D45D}', "MATHEMATICAL ITALIC SMALL P"),
    ('\u{1D45E}', "MATHEMATICAL ITALIC SMALL Q"),
    ('\u{1D45F}', "MATHEMATICAL ITALIC SMALL R"),
    ('\u{1D460}', "MATHEMATICAL ITALIC SMALL S"),
    ('\u{1D461}', "MATHEMATICAL ITALIC SMALL T"),
    ('\u{1D462}', "MATHEMATICAL ITALIC SMALL U"),
    ('\u{1D463}', "MATHEMATICAL ITALIC SMALL V"),
    ('\u{1D464}', "MATHEMATICAL ITALIC SMALL W"),
    ('\u{1D465}', "MATHEMATICAL ITALIC SMALL X"),
    ('\u{1D466}', "MATHEMATICAL ITALIC SMALL Y"),
    ('\u{1D467}', "MATHEMATICAL ITALIC SMALL Z"),
    ('\u{1D468}', "MATHEMATICAL BOLD ITALIC CAPITAL A"),
    ('\u{1D469}', "MATHEMATICAL BOLD ITALIC CAPITAL B"),
    ('\u{1D46A}', "MATHEMATICAL BOLD ITALIC CAPITAL C"),
    ('\u{1D46B}', "MATHEMATICAL BOLD ITALIC CAPITAL D"),
    ('\u{1D46C}', "MATHEMATICAL BOLD ITALIC CAPITAL E"),
    ('\u{1D46D}', "MATHEMATICAL BOLD ITALIC CAPITAL F"),
    ('\u{1D46E}', "MATHEMATICAL BOLD ITALIC CAPITAL G"),
    ('\u{1D46F}', "MATHEMATICAL BOLD ITALIC CAPITAL H"),
    ('\u{1D470}', "MATHEMATICAL BOLD ITALIC CAPITAL I"),
    ('\u{1D471}', "MATHEMATICAL BOLD ITALIC CAPITAL J"),
    ('\u{1D472}', "MATHEMATICAL BOLD ITALIC CAPITAL K"),
    ('\u{1D473}', "MATHEMATICAL BOLD ITALIC CAPITAL L"),
    ('\u{1D474}', "MATHEMATICAL BOLD ITALIC CAPITAL M"),
    ('\u{1D475}', "MATHEMATICAL BOLD ITALIC CAPITAL N"),
    ('\u{1D476}', "MATHEMATICAL BOLD ITALIC CAPITAL O"),
    ('\u{1D477}', "MATHEMATICAL BOLD ITALIC CAPITAL P"),
    ('\u{1D478}', "MATHEMATICAL BOLD ITALIC CAPITAL Q"),
    ('\u{1D479}', "MATHEMATICAL BOLD ITALIC CAPITAL R"),
    ('\u{1D47A}', "MATHEMATICAL BOLD ITALIC CAPITAL S"),
    ('\u{1D47B}', "MATHEMATICAL BOLD ITALIC CAPITAL T"),
    ('\u{1D47C}', "MATHEMATICAL BOLD ITALIC CAPITAL U"),
    ('\u{1D47D}', "MATHEMATICAL BOLD ITALIC CAPITAL V"),
    ('\u{1D47E}', "MATHEMATICAL BOLD ITALIC CAPITAL W"),
    ('\u{1D47F}', "MATHEMATICAL BOLD ITALIC CAPITAL X"),
    ('\u{1D480}', "MATHEMATICAL BOLD ITALIC CAPITAL Y"),
    ('\u{1D481}', "MATHEMATICAL BOLD ITALIC CAPITAL Z"),
    ('\u{1D482}', "MATHEMATICAL BOLD ITALIC SMALL A"),
    ('\u{1D483}', "MATHEMATICAL BOLD ITALIC SMALL B"),
    ('\u{1D484}', "MATHEMATICAL BOLD ITALIC SMALL C"),
    ('\u{1D485}', "MATHEMATICAL BOLD ITALIC SMALL D"),
    ('\u{1D486}', "MATHEMATICAL BOLD ITALIC SMALL E"),
    ('\u{1D487}', "MATHEMATICAL BOLD ITALIC SMALL F"),
    ('\u{1D488}', "MATHEMATICAL BOLD ITALIC SMALL G"),
    ('\u{1D489}', "MATHEMATICAL BOLD ITALIC SMALL H"),
    ('\u{1D48A}', "MATHEMATICAL BOLD ITALIC SMALL I"),
    ('\u{1D48B}', "MATHEMATICAL BOLD ITALIC SMALL J"),
    ('\u{1D48C}', "MATHEMATICAL BOLD ITALIC SMALL K"),
    ('\u{1D48D}', "MATHEMATICAL BOLD ITALIC SMALL L"),
    ('\u{1D48E}', "MATHEMATICAL BOLD ITALIC SMALL M"),
    ('\u{1D48F}', "MATHEMATICAL BOLD ITALIC SMALL N"),
    ('\u{1D490}', "MATHEMATICAL BOLD ITALIC SMALL O"),
    ('\u{1D491}', "MATHEMATICAL BOLD ITALIC SMALL P"),
    ('\u{1D492}', "MATHEMATICAL BOLD ITALIC SMALL Q"),
    ('\u{1D493}', "MATHEMATICAL BOLD ITALIC SMALL R"),
    ('\u{1D494}', "MATHEMATICAL BOLD ITALIC SMALL S"),
    ('\u{1D495}', "MATHEMATICAL BOLD ITALIC SMALL T"),
    ('\u{1D496}', "MATHEMATICAL BOLD ITALIC SMALL U"),
    ('\u{1D497}', "MATHEMATICAL BOLD ITALIC SMALL V"),
    ('\u{1D498}', "MATHEMATICAL BOLD ITALIC SMALL W"),
    ('\u{1D499}', "MATHEMATICAL BOLD ITALIC SMALL X"),
    ('\u{1D49A}', "MATHEMATICAL BOLD ITALIC SMALL Y"),
    ('\u{1D49B}', "MATHEMATICAL BOLD ITALIC SMALL Z"),
    ('\u{1D49C}', "MATHEMATICAL SCRIPT CAPITAL A"),
    ('\u{1D49E}', "MATHEMATICAL SCRIPT CAPITAL C"),
    ('\u{1D49F}', "MATHEMATICAL SCRIPT CAPITAL D"),
    ('\u{1D4A2}', "MATHEMATICAL SCRIPT CAPITAL G"),
    ('\u{1D4A5}', "MATHEMATICAL SCRIPT CAPITAL J"),
    ('\u{1D4A6}', "MATHEMATICAL SCRIPT CAPITAL K"),
    ('\u{1D4A9}', "MATHEMATICAL SCRIPT CAPITAL N"),
    ('\u{1D4AA}', "MATHEMATICAL SCRIPT CAPITAL O"),
    ('\u{1D4AB}', "MATHEMATICAL SCRIPT CAPITAL P"),
    ('\u{1D4AC}', "MATHEMATICAL SCRIPT CAPITAL Q"),
    ('\u{1D4AE}', "MATHEMATICAL SCRIPT CAPITAL S"),
    ('\u{1D4AF}', "MATHEMATICAL SCRIPT CAPITAL T"),
    ('\u{1D4B0}', "MATHEMATICAL SCRIPT CAPITAL U"),
    ('\u{1D4B1}', "MATHEMATICAL SCRIPT CAPITAL V"),
    ('\u{1D4B2}', "MATHEMATICAL SCRIPT CAPITAL W"),
    ('\u{1D4B3}', "MATHEMATICAL SCRIPT CAPITAL X"),
    ('\u{1D4B4}', "MATHEMATICAL SCRIPT CAPITAL Y"),
    ('\u{1D4B5}', "MATHEMATICAL SCRIPT CAPITAL Z"),
    ('\u{1D4B6}', "MATHEMATICAL SCRIPT SMALL A"),
    ('\u{1D4B7}', "MATHEMATICAL SCRIPT SMALL B"),
    ('\u{1D4B8}', "MATHEMATICAL SCRIPT SMALL C"),
    ('\u{1D4B9}', "MATHEMATICAL SCRIPT SMALL D"),
    ('\u{1D4BB}', "MATHEMATICAL SCRIPT SMALL F"),
    ('\u{1D4BD}', "MATHEMATICAL SCRIPT SMALL H"),
    ('\u{1D4BE}', "MATHEMATICAL SCRIPT SMALL I"),
    ('\u{1D4BF}', "MATHEMATICAL SCRIPT SMALL J"),
    ('\u{1D4C0}', "MATHEMATICAL SCRIPT SMALL K"),
    ('\u{1D4C1}', "MATHEMATICAL SCRIPT SMALL L"),
    ('\u{1D4C2}', "MATHEMATICAL SCRIPT SMALL M"),
    ('\u{1D4C3}', "MATHEMATICAL SCRIPT SMALL N"),
    ('\u{1D4C5}', "MATHEMATICAL SCRIPT SMALL P"),
    ('\u{1D4C6}', "MATHEMATICAL SCRIPT SMALL Q"),
    ('\u{1D4C7}', "MATHEMATICAL SCRIPT SMALL R"),
    ('\u{1D4C8}', "MATHEMATICAL SCRIPT SMALL S"),
    ('\u{1D4C9}', "MATHEMATICAL SCRIPT SMALL T"),
    ('\u{1D4CA}', "MATHEMATICAL SCRIPT SMALL U"),
    ('\u{1D4CB}', "MATHEMATICAL SCRIPT SMALL V"),
    ('\u{1D4CC}', "MATHEMATICAL SCRIPT SMALL W"),
    ('\u{1D4CD}', "MATHEMATICAL SCRIPT SMALL X"),
    ('\u{1D4CE}', "MATHEMATICAL SCRIPT SMALL Y"),
    ('\u{1D4CF}', "MATHEMATICAL SCRIPT SMALL Z"),
    ('\u{1D4D0}', "MATHEMATICAL BOLD SCRIPT CAPITAL A"),
    ('\u{1D4D1}', "MATHEMATICAL BOLD SCRIPT CAPITAL B"),
    ('\u{1D4D2}', "MATHEMATICAL BOLD SCRIPT CAPITAL C"),
    ('\u{1D4D3}', "MATHEMATICAL BOLD SCRIPT CAPITAL D"),
    ('\u{1D4D4}', "MATHEMATICAL BOLD SCRIPT CAPITAL E"),
    ('\u{1D4D5}', "MATHEMATICAL BOLD SCRIPT CAPITAL F"),
    ('\u{1D4D6}', "MATHEMATICAL BOLD SCRIPT CAPITAL G"),
    ('\u{1D4D7}', "MATHEMATICAL BOLD SCRIPT CAPITAL H"),
    ('\u{1D4D8}', "MATHEMATICAL BOLD SCRIPT CAPITAL I"),
    ('\u{1D4D9}', "MATHEMATICAL BOLD SCRIPT CAPITAL J"),
    ('\u{1D4DA}', "MATHEMATICAL BOLD SCRIPT CAPITAL K"),
    ('\u{1D4DB}', "MATHEMATICAL BOLD SCRIPT CAPITAL L"),
    ('\u{1D4DC}', "MATHEMATICAL BOLD SCRIPT CAPITAL M"),
    ('\u{1D4DD}', "MATHEMATICAL BOLD SCRIPT CAPITAL N"),
    ('\u{1D4DE}', "MATHEMATICAL BOLD SCRIPT CAPITAL O"),
    ('\u{1D4DF}', "MATHEMATICAL BOLD SCRIPT CAPITAL P"),
    ('\u{1D4E0}', "MATHEMATICAL BOLD SCRIPT CAPITAL Q"),
    ('\u{1D4E1}', "MATHEMATICAL BOLD SCRIPT CAPITAL R"),
    ('\u{1D4E2}', "MATHEMATICAL BOLD SCRIPT CAPITAL S"),
    ('\u{1D4E3}', "MATHEMATICAL BOLD SCRIPT CAPITAL T"),
    ('\u{1D4E4}', "MATHEMATICAL BOLD SCRIPT CAPITAL U"),
    ('\u{1D4E5}', "MATHEMATICAL BOLD SCRIPT CAPITAL V"),
    ('\u{1D4E6}', "MATHEMATICAL BOLD SCRIPT CAPITAL W"),
    ('\u{1D4E7}', "MATHEMATICAL BOLD SCRIPT CAPITAL X"),
    ('\u{1D4E8}', "MATHEMATICAL BOLD SCRIPT CAPITAL Y"),
    ('\u{1D4E9}', "MATHEMATICAL BOLD SCRIPT CAPITAL Z"),
    ('\u{1D4EA}', "MATHEMATICAL BOLD SCRIPT SMALL A"),
    ('\u{1D4EB}', "MATHEMATICAL BOLD SCRIPT SMALL B"),
    ('\u{1D4EC}', "MATHEMATICAL BOLD SCRIPT SMALL C"),
    ('\u{1D4ED}', "MATHEMATICAL BOLD SCRIPT SMALL D"),
    ('\u{1D4EE}', "MATHEMATICAL BOLD SCRIPT SMALL E"),
    ('\u{1D4EF}', "MATHEMATICAL BOLD SCRIPT SMALL F"),
    ('\u{1D4F0}', "MATHEMATICAL BOLD SCRIPT SMALL G"),
    ('\u{1D4F1}', "MATHEMATICAL BOLD SCRIPT SMALL H"),
    ('\u{1D4F2}', "MATHEMATICAL BOLD SCRIPT SMALL I"),
    ('\u{1D4F3}', "MATHEMATICAL BOLD SCRIPT SMALL J"),
    ('\u{1D4F4}', "MATHEMATICAL BOLD SCRIPT SMALL K"),
    ('\u{1D4F5}', "MATHEMATICAL BOLD SCRIPT SMALL L"),
    ('\u{1D4F6}', "MATHEMATICAL BOLD SCRIPT SMALL M"),
    ('\u{1D4F7}', "MATHEMATICAL BOLD SCRIPT SMALL N"),
    ('\u{1D4F8}', "MATHEMATICAL BOLD SCRIPT SMALL O"),
    ('\u{1D4F9}', "MATHEMATICAL BOLD SCRIPT SMALL P"),
    ('\u{1D4FA}', "MATHEMATICAL BOLD SCRIPT SMALL Q"),
    ('\u{1D4FB}', "MATHEMATICAL BOLD SCRIPT SMALL R"),
    ('\u{1D4FC}', "MATHEMATICAL BOLD SCRIPT SMALL S"),
    ('\u{1D4FD}', "MATHEMATICAL BOLD SCRIPT SMALL T"),
    ('\u{1D4FE}', "MATHEMATICAL BOLD SCRIPT SMALL U"),
    ('\u{1D4FF}', "MATHEMATICAL BOLD SCRIPT SMALL V"),
    ('\u{1D500}', "MATHEMATICAL BOLD SCRIPT SMALL W"),
    ('\u{1D501}', "MATHEMATICAL BOLD SCRIPT SMALL X"),
    ('\u{1D502}', "MATHEMATICAL BOLD SCRIPT SMALL Y"),
    ('\u{1D503}', "MATHEMATICAL BOLD SCRIPT SMALL Z"),
    ('\u{1D504}', "MATHEMATICAL FRAKTUR CAPITAL A"),
    ('\u{1D505}', "MATHEMATICAL FRAKTUR CAPITAL B"),
    ('\u{1D507}', "MATHEMATICAL FRAKTUR CAPITAL D"),
    ('\u{1D508}', "MATHEMATICAL FRAKTUR CAPITAL E"),
    ('\u{1D509}', "MATHEMATICAL FRAKTUR CAPITAL F"),
    ('\u{1D50A}', "MATHEMATICAL FRAKTUR CAPITAL G"),
    ('\u{1D50D}', "MATHEMATICAL FRAKTUR CAPITAL J"),
    ('\u{1D50E}', "MATHEMATICAL FRAKTUR CAPITAL K"),
    ('\u{1D50F}', "MATHEMATICAL FRAKTUR CAPITAL L"),
    ('\u{1D510}', "MATHEMATICAL FRAKTUR CAPITAL M"),
    ('\u{1D511}', "MATHEMATICAL FRAKTUR CAPITAL N"),
    ('\u{1D512}', "MATHEMATICAL FRAKTUR CAPITAL O"),
    ('\u{1D513}', "MATHEMATICAL FRAKTUR CAPITAL P"),
    ('\u{1D514}', "MATHEMATICAL FRAKTUR CAPITAL Q"),
    ('\u{1D516}', "MATHEMATICAL FRAKTUR CAPITAL S"),
    ('\u{1D517}', "MATHEMATICAL FRAKTUR CAPITAL T"),
    ('\u{1D518}', "MATHEMATICAL FRAKTUR CAPITAL U"),
    ('\u{1D519}', "MATHEMATICAL FRAKTUR CAPITAL V"),
    ('\u{1D51A}', "MATHEMATICAL FRAKTUR CAPITAL W"),
    ('\u{1D51B}', "MATHEMATICAL FRAKTUR CAPITAL X"),
    ('\u{1D51C}', "MATHEMATICAL FRAKTUR CAPITAL Y"),
    ('\u{1D51E}', "MATHEMATICAL FRAKTUR SMALL A"),
    ('\u{1D51F}', "MATHEMATICAL FRAKTUR SMALL B"),
    ('\u{1D520}', "MATHEMATICAL FRAKTUR SMALL C"),
    ('\u{1D521}', "MATHEMATICAL FRAKTUR SMALL D"),
    ('\u{1D522}', "MATHEMATICAL FRAKTUR SMALL E"),
    ('\u{1D523}', "MATHEMATICAL FRAKTUR SMALL F"),
    ('\u{1D524}', "MATHEMATICAL FRAKTUR SMALL G"),
    ('\u{1D525}', "MATHEMATICAL FRAKTUR SMALL H"),
    ('\u{1D526}', "MATHEMATICAL FRAKTUR SMALL I"),
    ('\u{1D527}', "MATHEMATICAL FRAKTUR SMALL J"),
    ('\u{1D528}', "MATHEMATICAL FRAKTUR SMALL K"),
    ('\u{1D529}', "MATHEMATICAL FRAKTUR SMALL L"),
    ('\u{1D52A}', "MATHEMATICAL FRAKTUR SMALL M"),
    ('\u{1D52B}', "MATHEMATICAL FRAKTUR SMALL N"),
    ('\u{1D52C}', "MATHEMATICAL FRAKTUR SMALL O"),
    ('\u{1D52D}', "MATHEMATICAL FRAKTUR SMALL P"),
    ('\u{1D52E}', "MATHEMATICAL FRAKTUR SMALL Q"),
    ('\u{1D52F}', "MATHEMATICAL FRAKTUR SMALL R"),
    ('\u{1D530}', "MATHEMATICAL FRAKTUR SMALL S"),
    ('\u{1D531}', "MATHEMATICAL FRAKTUR SMALL T"),
    ('\u{1D532}', "MATHEMATICAL FRAKTUR SMALL U"),
    ('\u{1D533}', "MATHEMATICAL FRAKTUR SMALL V"),
    ('\u{1D534}', "MATHEMATICAL FRAKTUR SMALL W"),
    ('\u{1D535}', "MATHEMATICAL FRAKTUR SMALL X"),
    ('\u{1D536}', "MATHEMATICAL FRAKTUR SMALL Y"),
    ('\u{1D537}', "MATHEMATICAL FRAKTUR SMALL Z"),
    ('\u{1D538}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL A"),
    ('\u{1D539}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL B"),
    ('\u{1D53B}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL D"),
    ('\u{1D53C}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL E"),
    ('\u{1D53D}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL F"),
    ('\u{1D53E}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL G"),
    ('\u{1D540}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL I"),
    ('\u{1D541}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL J"),
    ('\u{1D542}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL K"),
    ('\u{1D543}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL L"),
    ('\u{1D544}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL M"),
    ('\u{1D546}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL O"),
    ('\u{1D54A}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL S"),
    ('\u{1D54B}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL T"),
    ('\u{1D54C}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL U"),
    ('\u{1D54D}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL V"),
    ('\u{1D54E}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL W"),
    ('\u{1D54F}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL X"),
    ('\u{1D550}', "MATHEMATICAL DOUBLE-STRUCK CAPITAL Y"),
    ('\u{1D552}', "MATHEMATICAL DOUBLE-STRUCK SMALL A"),
    ('\u{1D553}', "MATHEMATICAL DOUBLE-STRUCK SMALL B"),
    ('\u{1D554}', "MATHEMATICAL DOUBLE-STRUCK SMALL C"),
    ('\u{1D555}', "MATHEMATICAL DOUBLE-STRUCK SMALL D"),
    ('\u{1D556}', "MATHEMATICAL DOUBLE-STRUCK SMALL E"),
    ('\u{1D557}', "MATHEMATICAL DOUBLE-STRUCK SMALL F"),
    ('\u{1D558}', "MATHEMATICAL DOUBLE-STRUCK SMALL G"),
    ('\u{1D559}', "MATHEMATICAL DOUBLE-STRUCK SMALL H"),
    ('\u{1D55A}', "MATHEMATICAL DOUBLE-STRUCK SMALL I"),
    ('\u{1D55B}', "MATHEMATICAL DOUBLE-STRUCK SMALL J"),
    ('\u{1D55C}', "MATHEMATICAL DOUBLE-STRUCK SMALL K"),
    ('\u{1D55D}', "MATHEMATICAL DOUBLE-STRUCK SMALL L"),
    ('\u{1D55E}', "MATHEMATICAL DOUBLE-STRUCK SMALL M"),
    ('\u{1D55F}', "MATHEMATICAL DOUBLE-STRUCK SMALL N"),
    ('\u{1D560}', "MATHEMATICAL DOUBLE-STRUCK SMALL O"),
    ('\u{1D561}', "MATHEMATICAL DOUBLE-STRUCK SMALL P"),
    ('\u{1D562}', "MATHEMATICAL DOUBLE-STRUCK SMALL Q"),
    ('\u{1D563}', "MATHEMATICAL DOUBLE-STRUCK SMALL R"),
    ('\u{1D564}', "MATHEMATICAL DOUBLE-STRUCK SMALL S"),
    ('\u{1D565}', "MATHEMATICAL DOUBLE-STRUCK SMALL T"),
    ('\u{1D566}', "MATHEMATICAL DOUBLE-STRUCK SMALL U"),
    ('\u{1D567}', "MATHEMATICAL DOUBLE-STRUCK SMALL V"),
    ('\u{1D568}', "MATHEMATICAL DOUBLE-STRUCK SMALL W"),
    ('\u{1D569}', "MATHEMATICAL DOUBLE-STRUCK SMALL X"),
    ('\u{1D56A}', "MATHEMATICAL DOUBLE-STRUCK SMALL Y"),
    ('\u{1D56B}', "MATHEMATICAL DOUBLE-STRUCK SMALL Z"),
    ('\u{1D56C}', "MATHEMATICAL BOLD FRAKTUR CAPITAL A"),
    ('\u{1D56D}', "MATHEMATICAL BOLD FRAKTUR CAPITAL B"),
    ('\u{1D56E}', "MATHEMATICAL BOLD FRAKTUR CAPITAL C"),
    ('\u{1D56F}', "MATHEMATICAL BOLD FRAKTUR CAPITAL D"),
    ('\u{1D570}', "MATHEMATICAL BOLD FRAKTUR CAPITAL E"),
    ('\u{1D571}', "MATHEMATICAL BOLD FRAKTUR CAPITAL F"),
    ('\u{1D572}', "MATHEMATICAL BOLD FRAKTUR CAPITAL G"),
    ('\u{1D573}', "MATHEMATICAL BOLD FRAKTUR CAPITAL H"),
    ('\u{1D574}', "MATHEMATICAL BOLD FRAKTUR CAPITAL I"),
    ('\u{1D575}', "MATHEMATICAL BOLD FRAKTUR CAPITAL J"),
    ('\u{1D576}', "MATHEMATICAL BOLD FRAKTUR CAPITAL K"),
    ('\u{1D577}', "MATHEMATICAL BOLD FRAKTUR CAPITAL L"),
    ('\u{1D578}', "MATHEMATICAL BOLD FRAKTUR CAPITAL M"),
    ('\u{1D579}', "MATHEMATICAL BOLD FRAKTUR CAPITAL N"),
    ('\u{1D57A}', "MATHEMATICAL BOLD FRAKTUR CAPITAL O"),
    ('\u{1D57B}', "MATHEMATICAL BOLD FRAKTUR CAPITAL P"),
    ('\u{1D57C}', "MATHEMATICAL BOLD FRAKTUR CAPITAL Q"),
    ('\u{1D57D}', "MATHEMATICAL BOLD FRAKTUR CAPITAL R"),
    ('\u{1D57E}', "MATHEMATICAL BOLD FRAKTUR CAPITAL S"),
    ('\u{1D57F}', "MATHEMATICAL BOLD FRAKTUR CAPITAL T"),
    ('\u{1D580}', "MATHEMATICAL BOLD FRAKTUR CAPITAL U"),
    ('\u{1D581}', "MATHEMATICAL BOLD FRAKTUR CAPITAL V"),
    ('\u{1D582}', "MATHEMATICAL BOLD FRAKTUR CAPITAL W"),
    ('\u{1D583}', "MATHEMATICAL BOLD FRAKTUR CAPITAL X"),
    ('\u{1D584}', "MATHEMATICAL BOLD FRAKTUR CAPITAL Y"),
    ('\u{1D585}', "MATHEMATICAL BOLD FRAKTUR CAPITAL Z"),
    ('\u{1D586}', "MATHEMATICAL BOLD FRAKTUR SMALL A"),
    ('\u{1D587}', "MATHEMATICAL BOLD FRAKTUR SMALL B"),
    ('\u{1D588}', "MATHEMATICAL BOLD FRAKTUR SMALL C"),
    ('\u{1D589}', "MATHEMATICAL BOLD FRAKTUR SMALL D"),
    ('\u{1D58A}', "MATHEMATICAL BOLD FRAKTUR SMALL E"),
    ('\u{1D58B}', "MATHEMATICAL BOLD FRAKTUR SMALL F"),
    ('\u{1D58C}', "MATHEMATICAL BOLD FRAKTUR SMALL G"),
    ('\u{1D58D}', "MATHEMATICAL BOLD FRAKTUR SMALL H"),
    ('\u{1D58E}', "MATHEMATICAL BOLD FRAKTUR SMALL I"),
    ('\u{1D58F}', "MATHEMATICAL BOLD FRAKTUR SMALL J"),
    ('\u{1D590}', "MATHEMATICAL BOLD FRAKTUR SMALL K"),
    ('\u{1D591}', "MATHEMATICAL BOLD FRAKTUR SMALL L"),
    ('\u{1D592}', "MATHEMATICAL BOLD FRAKTUR SMALL M"),
    ('\u{1D593}', "MATHEMATICAL BOLD FRAKTUR SMALL N"),
    ('\u{1D594}', "MATHEMATICAL BOLD FRAKTUR SMALL O"),
    ('\u{1D595}', "MATHEMATICAL BOLD FRAKTUR SMALL P"),
    ('\u{1D596}', "MATHEMATICAL BOLD FRAKTUR SMALL Q"),
    ('\u{1D597}', "MATHEMATICAL BOLD FRAKTUR SMALL R"),
    ('\u{1D598}', "MATHEMATICAL BOLD FRAKTUR SMALL S"),
    ('\u{1D599}', "MATHEMATICAL BOLD FRAKTUR SMALL T"),
    ('\u{1D59A}', "MATHEMATICAL BOLD FRAKTUR SMALL U"),
    ('\u{1D59B}', "MATHEMATICAL BOLD FRAKTUR SMALL V"),
    ('\u{1D59C}', "MATHEMATICAL BOLD FRAKTUR SMALL W"),
    ('\u{1D59D}', "MATHEMATICAL BOLD FRAKTUR SMALL X"),
    ('\u{1D59E}', "MATHEMATICAL BOLD FRAKTUR SMALL Y"),
    ('\u{1D59F}', "MATHEMATICAL BOLD FRAKTUR SMALL Z"),
    ('\u{1D5A0}', "MATHEMATICAL SANS-SERIF CAPITAL A"),
    ('\u{1D5A1}', "MATHEMATICAL SANS-SERIF CAPITAL B"),
    ('\u{1D5A2}', "MATHEMATICAL SANS-SERIF CAPITAL C"),
    ('\u{1D5A3}', "MATHEMATICAL SANS-SERIF CAPITAL D"),
    ('\u{1D5A4}', "MATHEMATICAL SANS-SERIF CAPITAL E"),
    ('\u{1D5A5}', "MATHEMATICAL SANS-SERIF CAPITAL F"),
    ('\u{1D5A6}', "MATHEMATICAL SANS-SERIF CAPITAL G"),
    ('\u{1D5A7}', "MATHEMATICAL SANS-SERIF CAPITAL H"),
    ('\u{1D5A8}', "MATHEMATICAL SANS-SERIF CAPITAL I"),
    ('\u{1D5A9}', "MATHEMATICAL SANS-SERIF CAPITAL J"),
    ('\u{1D5AA}', "MATHEMATICAL SANS-SERIF CAPITAL K"),
    ('\u{1D5AB}', "MATHEMATICAL SANS-SERIF CAPITAL L"),
    ('\u{1D5AC}', "MATHEMATICAL SANS-SERIF CAPITAL M"),
    ('\u{1D5AD}', "MATHEMATICAL SANS-SERIF CAPITAL N"),
    ('\u{1D5AE}', "MATHEMATICAL SANS-SERIF CAPITAL O"),
    ('\u{1D5AF}', "MATHEMATICAL SANS-SERIF CAPITAL P"),
    ('\u{1D5B0}', "MATHEMATICAL SANS-SERIF CAPITAL Q"),
    ('\u{1D5B1}', "MATHEMATICAL SANS-SERIF CAPITAL R"),
    ('\u{1D5B2}', "MATHEMATICAL SANS-SERIF CAPITAL S"),
    ('\u{1D5B3}', "MATHEMATICAL SANS-SERIF CAPITAL T"),
    ('\u{1D5B4}', "MATHEMATICAL SANS-SERIF CAPITAL U"),
    ('\u{1D5B5}', "MATHEMATICAL SANS-SERIF CAPITAL V"),
    ('\u{1D5B6}', "MATHEMATICAL SANS-SERIF CAPITAL W"),
    ('\u{1D5B7}', "MATHEMATICAL SANS-SERIF CAPITAL X"),
    ('\u{1D5B8}', "MATHEMATICAL SANS-SERIF CAPITAL Y"),
    ('\u{1D5B9}', "MATHEMATICAL SANS-SERIF CAPITAL Z"),
    ('\u{1D5BA}', "MATHEMATICAL SANS-SERIF SMALL A"),
    ('\u{1D5BB}', "MATHEMATICAL SANS-SERIF SMALL B"),
    ('\u{1D5BC}', "MATHEMATICAL SANS-SERIF SMALL C"),
    ('\u{1D5BD}', "MATHEMATICAL SANS-SERIF SMALL D"),
    ('\u{1D5BE}', "MATHEMATICAL SANS-SERIF SMALL E"),
    ('\u{1D5BF}', "MATHEMATICAL SANS-SERIF SMALL F"),
    ('\u{1D5C0}', "MATHEMATICAL SANS-SERIF SMALL G"),
    ('\u{1D5C1}', "MATHEMATICAL SANS-SERIF SMALL H"),
    ('\u{1D5C2}', "MATHEMATICAL SANS-SERIF SMALL I"),
    ('\u{1D5C3}', "MATHEMATICAL SANS-SERIF SMALL J"),
    ('\u{1D5C4}', "MATHEMATICAL SANS-SERIF SMALL K"),
    ('\u{1D5C5}', "MATHEMATICAL SANS-SERIF SMALL L"),
    ('\u{1D5C6}', "MATHEMATICAL SANS-SERIF SMALL M"),
    ('\u{1D5C7}', "MATHEMATICAL SANS-SERIF SMALL N"),
    ('\u{1D5C8}', "MATHEMATICAL SANS-SERIF SMALL O"),
    ('\u{1D5C9}', "MATHEMATICAL SANS-SERIF SMALL P"),
    ('\u{1D5CA}', "MATHEMATICAL SANS-SERIF SMALL Q"),
    ('\u{1D5CB}', "MATHEMATICAL SANS-SERIF SMALL R"),
    ('\u{1D5CC}', "MATHEMATICAL SANS-SERIF SMALL S"),
    ('\u{1D5CD}', "MATHEMATICAL SANS-SERIF SMALL T"),
    ('\u{1D5CE}', "MATHEMATICAL SANS-SERIF SMALL U"),
    ('\u{1D5CF}', "MATHEMATICAL SANS-SERIF SMALL V"),
    ('\u{1D5D0}', "MATHEMATICAL SANS-SERIF SMALL W"),
    ('\u{1D5D1}', "MATHEMATICAL SANS-SERIF SMALL X"),
    ('\u{1D5D2}', "MATHEMATICAL SANS-SERIF SMALL Y"),
    ('\u{1D5D3}', "MATHEMATICAL SANS-SERIF SMALL Z"),
    ('\u{1D5D4}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL A"),
    ('\u{1D5D5}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL B"),
    ('\u{1D5D6}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL C"),
    ('\u{1D5D7}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL D"),
    ('\u{1D5D8}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL E"),
    ('\u{1D5D9}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL F"),
    ('\u{1D5DA}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL G"),
    ('\u{1D5DB}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL H"),
    ('\u{1D5DC}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL I"),
    ('\u{1D5DD}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL J"),
    ('\u{1D5DE}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL K"),
    ('\u{1D5DF}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL L"),
    ('\u{1D5E0}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL M"),
    ('\u{1D5E1}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL N"),
    ('\u{1D5E2}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL O"),
    ('\u{1D5E3}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL P"),
    ('\u{1D5E4}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL Q"),
    ('\u{1D5E5}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL R"),
    ('\u{1D5E6}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL S"),
    ('\u{1D5E7}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL T"),
    ('\u{1D5E8}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL U"),
    ('\u{1D5E9}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL V"),
    ('\u{1D5EA}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL W"),
    ('\u{1D5EB}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL X"),
    ('\u{1D5EC}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL Y"),
    ('\u{1D5ED}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL Z"),
    ('\u{1D5EE}', "MATHEMATICAL SANS-SERIF BOLD SMALL A"),
    ('\u{1D5EF}', "MATHEMATICAL SANS-SERIF BOLD SMALL B"),
    ('\u{1D5F0}', "MATHEMATICAL SANS-SERIF BOLD SMALL C"),
    ('\u{1D5F1}', "MATHEMATICAL SANS-SERIF BOLD SMALL D"),
    ('\u{1D5F2}', "MATHEMATICAL SANS-SERIF BOLD SMALL E"),
    ('\u{1D5F3}', "MATHEMATICAL SANS-SERIF BOLD SMALL F"),
    ('\u{1D5F4}', "MATHEMATICAL SANS-SERIF BOLD SMALL G"),
    ('\u{1D5F5}', "MATHEMATICAL SANS-SERIF BOLD SMALL H"),
    ('\u{1D5F6}', "MATHEMATICAL SANS-SERIF BOLD SMALL I"),
    ('\u{1D5F7}', "MATHEMATICAL SANS-SERIF BOLD SMALL J"),
    ('\u{1D5F8}', "MATHEMATICAL SANS-SERIF BOLD SMALL K"),
    ('\u{1D5F9}', "MATHEMATICAL SANS-SERIF BOLD SMALL L"),
    ('\u{1D5FA}', "MATHEMATICAL SANS-SERIF BOLD SMALL M"),
    ('\u{1D5FB}', "MATHEMATICAL SANS-SERIF BOLD SMALL N"),
    ('\u{1D5FC}', "MATHEMATICAL SANS-SERIF BOLD SMALL O"),
    ('\u{1D5FD}', "MATHEMATICAL SANS-SERIF BOLD SMALL P"),
    ('\u{1D5FE}', "MATHEMATICAL SANS-SERIF BOLD SMALL Q"),
    ('\u{1D5FF}', "MATHEMATICAL SANS-SERIF BOLD SMALL R"),
    ('\u{1D600}', "MATHEMATICAL SANS-SERIF BOLD SMALL S"),
    ('\u{1D601}', "MATHEMATICAL SANS-SERIF BOLD SMALL T"),
    ('\u{1D602}', "MATHEMATICAL SANS-SERIF BOLD SMALL U"),
    ('\u{1D603}', "MATHEMATICAL SANS-SERIF BOLD SMALL V"),
    ('\u{1D604}', "MATHEMATICAL SANS-SERIF BOLD SMALL W"),
    ('\u{1D605}', "MATHEMATICAL SANS-SERIF BOLD SMALL X"),
    ('\u{1D606}', "MATHEMATICAL SANS-SERIF BOLD SMALL Y"),
    ('\u{1D607}', "MATHEMATICAL SANS-SERIF BOLD SMALL Z"),
    ('\u{1D608}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL A"),
    ('\u{1D609}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL B"),
    ('\u{1D60A}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL C"),
    ('\u{1D60B}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL D"),
    ('\u{1D60C}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL E"),
    ('\u{1D60D}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL F"),
    ('\u{1D60E}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL G"),
    ('\u{1D60F}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL H"),
    ('\u{1D610}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL I"),
    ('\u{1D611}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL J"),
    ('\u{1D612}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL K"),
    ('\u{1D613}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL L"),
    ('\u{1D614}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL M"),
    ('\u{1D615}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL N"),
    ('\u{1D616}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL O"),
    ('\u{1D617}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL P"),
    ('\u{1D618}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Q"),
    ('\u{1D619}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL R"),
    ('\u{1D61A}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL S"),
    ('\u{1D61B}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL T"),
    ('\u{1D61C}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL U"),
    ('\u{1D61D}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL V"),
    ('\u{1D61E}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL W"),
    ('\u{1D61F}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL X"),
    ('\u{1D620}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Y"),
    ('\u{1D621}', "MATHEMATICAL SANS-SERIF ITALIC CAPITAL Z"),
    ('\u{1D622}', "MATHEMATICAL SANS-SERIF ITALIC SMALL A"),
    ('\u{1D623}', "MATHEMATICAL SANS-SERIF ITALIC SMALL B"),
    ('\u{1D624}', "MATHEMATICAL SANS-SERIF ITALIC SMALL C"),
    ('\u{1D625}', "MATHEMATICAL SANS-SERIF ITALIC SMALL D"),
    ('\u{1D626}', "MATHEMATICAL SANS-SERIF ITALIC SMALL E"),
    ('\u{1D627}', "MATHEMATICAL SANS-SERIF ITALIC SMALL F"),
    ('\u{1D628}', "MATHEMATICAL SANS-SERIF ITALIC SMALL G"),
    ('\u{1D629}', "MATHEMATICAL SANS-SERIF ITALIC SMALL H"),
    ('\u{1D62A}', "MATHEMATICAL SANS-SERIF ITALIC SMALL I"),
    ('\u{1D62B}', "MATHEMATICAL SANS-SERIF ITALIC SMALL J"),
    ('\u{1D62C}', "MATHEMATICAL SANS-SERIF ITALIC SMALL K"),
    ('\u{1D62D}', "MATHEMATICAL SANS-SERIF ITALIC SMALL L"),
    ('\u{1D62E}', "MATHEMATICAL SANS-SERIF ITALIC SMALL M"),
    ('\u{1D62F}', "MATHEMATICAL SANS-SERIF ITALIC SMALL N"),
    ('\u{1D630}', "MATHEMATICAL SANS-SERIF ITALIC SMALL O"),
    ('\u{1D631}', "MATHEMATICAL SANS-SERIF ITALIC SMALL P"),
    ('\u{1D632}', "MATHEMATICAL SANS-SERIF ITALIC SMALL Q"),
    ('\u{1D633}', "MATHEMATICAL SANS-SERIF ITALIC SMALL R"),
    ('\u{1D634}', "MATHEMATICAL SANS-SERIF ITALIC SMALL S"),
    ('\u{1D635}', "MATHEMATICAL SANS-SERIF ITALIC SMALL T"),
    ('\u{1D636}', "MATHEMATICAL SANS-SERIF ITALIC SMALL U"),
    ('\u{1D637}', "MATHEMATICAL SANS-SERIF ITALIC SMALL V"),
    ('\u{1D638}', "MATHEMATICAL SANS-SERIF ITALIC SMALL W"),
    ('\u{1D639}', "MATHEMATICAL SANS-SERIF ITALIC SMALL X"),
    ('\u{1D63A}', "MATHEMATICAL SANS-SERIF ITALIC SMALL Y"),
    ('\u{1D63B}', "MATHEMATICAL SANS-SERIF ITALIC SMALL Z"),
    ('\u{1D63C}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL A"),
    ('\u{1D63D}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL B"),
    ('\u{1D63E}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL C"),
    ('\u{1D63F}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL D"),
    ('\u{1D640}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL E"),
    ('\u{1D641}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL F"),
    ('\u{1D642}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL G"),
    ('\u{1D643}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL H"),
    ('\u{1D644}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL I"),
    ('\u{1D645}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL J"),
    ('\u{1D646}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL K"),
    ('\u{1D647}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL L"),
    ('\u{1D648}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL M"),
    ('\u{1D649}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL N"),
    ('\u{1D64A}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL O"),
    ('\u{1D64B}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL P"),
    ('\u{1D64C}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Q"),
    ('\u{1D64D}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL R"),
    ('\u{1D64E}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL S"),
    ('\u{1D64F}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL T"),
    ('\u{1D650}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL U"),
    ('\u{1D651}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL V"),
    ('\u{1D652}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL W"),
    ('\u{1D653}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL X"),
    ('\u{1D654}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Y"),
    ('\u{1D655}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL Z"),
    ('\u{1D656}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL A"),
    ('\u{1D657}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL B"),
    ('\u{1D658}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL C"),
    ('\u{1D659}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL D"),
    ('\u{1D65A}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL E"),
    ('\u{1D65B}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL F"),
    ('\u{1D65C}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL G"),
    ('\u{1D65D}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL H"),
    ('\u{1D65E}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL I"),
    ('\u{1D65F}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL J"),
    ('\u{1D660}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL K"),
    ('\u{1D661}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL L"),
    ('\u{1D662}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL M"),
    ('\u{1D663}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL N"),
    ('\u{1D664}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL O"),
    ('\u{1D665}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL P"),
    ('\u{1D666}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Q"),
    ('\u{1D667}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL R"),
    ('\u{1D668}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL S"),
    ('\u{1D669}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL T"),
    ('\u{1D66A}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL U"),
    ('\u{1D66B}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL V"),
    ('\u{1D66C}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL W"),
    ('\u{1D66D}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL X"),
    ('\u{1D66E}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Y"),
    ('\u{1D66F}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL Z"),
    ('\u{1D670}', "MATHEMATICAL MONOSPACE CAPITAL A"),
    ('\u{1D671}', "MATHEMATICAL MONOSPACE CAPITAL B"),
    ('\u{1D672}', "MATHEMATICAL MONOSPACE CAPITAL C"),
    ('\u{1D673}', "MATHEMATICAL MONOSPACE CAPITAL D"),
    ('\u{1D674}', "MATHEMATICAL MONOSPACE CAPITAL E"),
    ('\u{1D675}', "MATHEMATICAL MONOSPACE CAPITAL F"),
    ('\u{1D676}', "MATHEMATICAL MONOSPACE CAPITAL G"),
    ('\u{1D677}', "MATHEMATICAL MONOSPACE CAPITAL H"),
    ('\u{1D678}', "MATHEMATICAL MONOSPACE CAPITAL I"),
    ('\u{1D679}', "MATHEMATICAL MONOSPACE CAPITAL J"),
    ('\u{1D67A}', "MATHEMATICAL MONOSPACE CAPITAL K"),
    ('\u{1D67B}', "MATHEMATICAL MONOSPACE CAPITAL L"),
    ('\u{1D67C}', "MATHEMATICAL MONOSPACE CAPITAL M"),
    ('\u{1D67D}', "MATHEMATICAL MONOSPACE CAPITAL N"),
    ('\u{1D67E}', "MATHEMATICAL MONOSPACE CAPITAL O"),
    ('\u{1D67F}', "MATHEMATICAL MONOSPACE CAPITAL P"),
    ('\u{1D680}', "MATHEMATICAL MONOSPACE CAPITAL Q"),
    ('\u{1D681}', "MATHEMATICAL MONOSPACE CAPITAL R"),
    ('\u{1D682}', "MATHEMATICAL MONOSPACE CAPITAL S"),
    ('\u{1D683}', "MATHEMATICAL MONOSPACE CAPITAL T"),
    ('\u{1D684}', "MATHEMATICAL MONOSPACE CAPITAL U"),
    ('\u{1D685}', "MATHEMATICAL MONOSPACE CAPITAL V"),
    ('\u{1D686}', "MATHEMATICAL MONOSPACE CAPITAL W"),
    ('\u{1D687}', "MATHEMATICAL MONOSPACE CAPITAL X"),
    ('\u{1D688}', "MATHEMATICAL MONOSPACE CAPITAL Y"),
    ('\u{1D689}', "MATHEMATICAL MONOSPACE CAPITAL Z"),
    ('\u{1D68A}', "MATHEMATICAL MONOSPACE SMALL A"),
    ('\u{1D68B}', "MATHEMATICAL MONOSPACE SMALL B"),
    ('\u{1D68C}', "MATHEMATICAL MONOSPACE SMALL C"),
    ('\u{1D68D}', "MATHEMATICAL MONOSPACE SMALL D"),
    ('\u{1D68E}', "MATHEMATICAL MONOSPACE SMALL E"),
    ('\u{1D68F}', "MATHEMATICAL MONOSPACE SMALL F"),
    ('\u{1D690}', "MATHEMATICAL MONOSPACE SMALL G"),
    ('\u{1D691}', "MATHEMATICAL MONOSPACE SMALL H"),
    ('\u{1D692}', "MATHEMATICAL MONOSPACE SMALL I"),
    ('\u{1D693}', "MATHEMATICAL MONOSPACE SMALL J"),
    ('\u{1D694}', "MATHEMATICAL MONOSPACE SMALL K"),
    ('\u{1D695}', "MATHEMATICAL MONOSPACE SMALL L"),
    ('\u{1D696}', "MATHEMATICAL MONOSPACE SMALL M"),
    ('\u{1D697}', "MATHEMATICAL MONOSPACE SMALL N"),
    ('\u{1D698}', "MATHEMATICAL MONOSPACE SMALL O"),
    ('\u{1D699}', "MATHEMATICAL MONOSPACE SMALL P"),
    ('\u{1D69A}', "MATHEMATICAL MONOSPACE SMALL Q"),
    ('\u{1D69B}', "MATHEMATICAL MONOSPACE SMALL R"),
    ('\u{1D69C}', "MATHEMATICAL MONOSPACE SMALL S"),
    ('\u{1D69D}', "MATHEMATICAL MONOSPACE SMALL T"),
    ('\u{1D69E}', "MATHEMATICAL MONOSPACE SMALL U"),
    ('\u{1D69F}', "MATHEMATICAL MONOSPACE SMALL V"),
    ('\u{1D6A0}', "MATHEMATICAL MONOSPACE SMALL W"),
    ('\u{1D6A1}', "MATHEMATICAL MONOSPACE SMALL X"),
    ('\u{1D6A2}', "MATHEMATICAL MONOSPACE SMALL Y"),
    ('\u{1D6A3}', "MATHEMATICAL MONOSPACE SMALL Z"),
    ('\u{1D6A4}', "MATHEMATICAL ITALIC SMALL DOTLESS I"),
    ('\u{1D6A5}', "MATHEMATICAL ITALIC SMALL DOTLESS J"),
    ('\u{1D6A8}', "MATHEMATICAL BOLD CAPITAL ALPHA"),
    ('\u{1D6A9}', "MATHEMATICAL BOLD CAPITAL BETA"),
    ('\u{1D6AA}', "MATHEMATICAL BOLD CAPITAL GAMMA"),
    ('\u{1D6AB}', "MATHEMATICAL BOLD CAPITAL DELTA"),
    ('\u{1D6AC}', "MATHEMATICAL BOLD CAPITAL EPSILON"),
    ('\u{1D6AD}', "MATHEMATICAL BOLD CAPITAL ZETA"),
    ('\u{1D6AE}', "MATHEMATICAL BOLD CAPITAL ETA"),
    ('\u{1D6AF}', "MATHEMATICAL BOLD CAPITAL THETA"),
    ('\u{1D6B0}', "MATHEMATICAL BOLD CAPITAL IOTA"),
    ('\u{1D6B1}', "MATHEMATICAL BOLD CAPITAL KAPPA"),
    ('\u{1D6B2}', "MATHEMATICAL BOLD CAPITAL LAMDA"),
    ('\u{1D6B3}', "MATHEMATICAL BOLD CAPITAL MU"),
    ('\u{1D6B4}', "MATHEMATICAL BOLD CAPITAL NU"),
    ('\u{1D6B5}', "MATHEMATICAL BOLD CAPITAL XI"),
    ('\u{1D6B6}', "MATHEMATICAL BOLD CAPITAL OMICRON"),
    ('\u{1D6B7}', "MATHEMATICAL BOLD CAPITAL PI"),
    ('\u{1D6B8}', "MATHEMATICAL BOLD CAPITAL RHO"),
    ('\u{1D6B9}', "MATHEMATICAL BOLD CAPITAL THETA SYMBOL"),
    ('\u{1D6BA}', "MATHEMATICAL BOLD CAPITAL SIGMA"),
    ('\u{1D6BB}', "MATHEMATICAL BOLD CAPITAL TAU"),
    ('\u{1D6BC}', "MATHEMATICAL BOLD CAPITAL UPSILON"),
    ('\u{1D6BD}', "MATHEMATICAL BOLD CAPITAL PHI"),
    ('\u{1D6BE}', "MATHEMATICAL BOLD CAPITAL CHI"),
    ('\u{1D6BF}', "MATHEMATICAL BOLD CAPITAL PSI"),
    ('\u{1D6C0}', "MATHEMATICAL BOLD CAPITAL OMEGA"),
    ('\u{1D6C1}', "MATHEMATICAL BOLD NABLA"),
    ('\u{1D6C2}', "MATHEMATICAL BOLD SMALL ALPHA"),
    ('\u{1D6C3}', "MATHEMATICAL BOLD SMALL BETA"),
    ('\u{1D6C4}', "MATHEMATICAL BOLD SMALL GAMMA"),
    ('\u{1D6C5}', "MATHEMATICAL BOLD SMALL DELTA"),
    ('\u{1D6C6}', "MATHEMATICAL BOLD SMALL EPSILON"),
    ('\u{1D6C7}', "MATHEMATICAL BOLD SMALL ZETA"),
    ('\u{1D6C8}', "MATHEMATICAL BOLD SMALL ETA"),
    ('\u{1D6C9}', "MATHEMATICAL BOLD SMALL THETA"),
    ('\u{1D6CA}', "MATHEMATICAL BOLD SMALL IOTA"),
    ('\u{1D6CB}', "MATHEMATICAL BOLD SMALL KAPPA"),
    ('\u{1D6CC}', "MATHEMATICAL BOLD SMALL LAMDA"),
    ('\u{1D6CD}', "MATHEMATICAL BOLD SMALL MU"),
    ('\u{1D6CE}', "MATHEMATICAL BOLD SMALL NU"),
    ('\u{1D6CF}', "MATHEMATICAL BOLD SMALL XI"),
    ('\u{1D6D0}', "MATHEMATICAL BOLD SMALL OMICRON"),
    ('\u{1D6D1}', "MATHEMATICAL BOLD SMALL PI"),
    ('\u{1D6D2}', "MATHEMATICAL BOLD SMALL RHO"),
    ('\u{1D6D3}', "MATHEMATICAL BOLD SMALL FINAL SIGMA"),
    ('\u{1D6D4}', "MATHEMATICAL BOLD SMALL SIGMA"),
    ('\u{1D6D5}', "MATHEMATICAL BOLD SMALL TAU"),
    ('\u{1D6D6}', "MATHEMATICAL BOLD SMALL UPSILON"),
    ('\u{1D6D7}', "MATHEMATICAL BOLD SMALL PHI"),
    ('\u{1D6D8}', "MATHEMATICAL BOLD SMALL CHI"),
    ('\u{1D6D9}', "MATHEMATICAL BOLD SMALL PSI"),
    ('\u{1D6DA}', "MATHEMATICAL BOLD SMALL OMEGA"),
    ('\u{1D6DB}', "MATHEMATICAL BOLD PARTIAL DIFFERENTIAL"),
    ('\u{1D6DC}', "MATHEMATICAL BOLD EPSILON SYMBOL"),
    ('\u{1D6DD}', "MATHEMATICAL BOLD THETA SYMBOL"),
    ('\u{1D6DE}', "MATHEMATICAL BOLD KAPPA SYMBOL"),
    ('\u{1D6DF}', "MATHEMATICAL BOLD PHI SYMBOL"),
    ('\u{1D6E0}', "MATHEMATICAL BOLD RHO SYMBOL"),
    ('\u{1D6E1}', "MATHEMATICAL BOLD PI SYMBOL"),
    ('\u{1D6E2}', "MATHEMATICAL ITALIC CAPITAL ALPHA"),
    ('\u{1D6E3}', "MATHEMATICAL ITALIC CAPITAL BETA"),
    ('\u{1D6E4}', "MATHEMATICAL ITALIC CAPITAL GAMMA"),
    ('\u{1D6E5}', "MATHEMATICAL ITALIC CAPITAL DELTA"),
    ('\u{1D6E6}', "MATHEMATICAL ITALIC CAPITAL EPSILON"),
    ('\u{1D6E7}', "MATHEMATICAL ITALIC CAPITAL ZETA"),
    ('\u{1D6E8}', "MATHEMATICAL ITALIC CAPITAL ETA"),
    ('\u{1D6E9}', "MATHEMATICAL ITALIC CAPITAL THETA"),
    ('\u{1D6EA}', "MATHEMATICAL ITALIC CAPITAL IOTA"),
    ('\u{1D6EB}', "MATHEMATICAL ITALIC CAPITAL KAPPA"),
    ('\u{1D6EC}', "MATHEMATICAL ITALIC CAPITAL LAMDA"),
    ('\u{1D6ED}', "MATHEMATICAL ITALIC CAPITAL MU"),
    ('\u{1D6EE}', "MATHEMATICAL ITALIC CAPITAL NU"),
    ('\u{1D6EF}', "MATHEMATICAL ITALIC CAPITAL XI"),
    ('\u{1D6F0}', "MATHEMATICAL ITALIC CAPITAL OMICRON"),
    ('\u{1D6F1}', "MATHEMATICAL ITALIC CAPITAL PI"),
    ('\u{1D6F2}', "MATHEMATICAL ITALIC CAPITAL RHO"),
    ('\u{1D6F3}', "MATHEMATICAL ITALIC CAPITAL THETA SYMBOL"),
    ('\u{1D6F4}', "MATHEMATICAL ITALIC CAPITAL SIGMA"),
    ('\u{1D6F5}', "MATHEMATICAL ITALIC CAPITAL TAU"),
    ('\u{1D6F6}', "MATHEMATICAL ITALIC CAPITAL UPSILON"),
    ('\u{1D6F7}', "MATHEMATICAL ITALIC CAPITAL PHI"),
    ('\u{1D6F8}', "MATHEMATICAL ITALIC CAPITAL CHI"),
    ('\u{1D6F9}', "MATHEMATICAL ITALIC CAPITAL PSI"),
    ('\u{1D6FA}', "MATHEMATICAL ITALIC CAPITAL OMEGA"),
    ('\u{1D6FB}', "MATHEMATICAL ITALIC NABLA"),
    ('\u{1D6FC}', "MATHEMATICAL ITALIC SMALL ALPHA"),
    ('\u{1D6FD}', "MATHEMATICAL ITALIC SMALL BETA"),
    ('\u{1D6FE}', "MATHEMATICAL ITALIC SMALL GAMMA"),
    ('\u{1D6FF}', "MATHEMATICAL ITALIC SMALL DELTA"),
    ('\u{1D700}', "MATHEMATICAL ITALIC SMALL EPSILON"),
    ('\u{1D701}', "MATHEMATICAL ITALIC SMALL ZETA"),
    ('\u{1D702}', "MATHEMATICAL ITALIC SMALL ETA"),
    ('\u{1D703}', "MATHEMATICAL ITALIC SMALL THETA"),
    ('\u{1D704}', "MATHEMATICAL ITALIC SMALL IOTA"),
    ('\u{1D705}', "MATHEMATICAL ITALIC SMALL KAPPA"),
    ('\u{1D706}', "MATHEMATICAL ITALIC SMALL LAMDA"),
    ('\u{1D707}', "MATHEMATICAL ITALIC SMALL MU"),
    ('\u{1D708}', "MATHEMATICAL ITALIC SMALL NU"),
    ('\u{1D709}', "MATHEMATICAL ITALIC SMALL XI"),
    ('\u{1D70A}', "MATHEMATICAL ITALIC SMALL OMICRON"),
    ('\u{1D70B}', "MATHEMATICAL ITALIC SMALL PI"),
    ('\u{1D70C}', "MATHEMATICAL ITALIC SMALL RHO"),
    ('\u{1D70D}', "MATHEMATICAL ITALIC SMALL FINAL SIGMA"),
    ('\u{1D70E}', "MATHEMATICAL ITALIC SMALL SIGMA"),
    ('\u{1D70F}', "MATHEMATICAL ITALIC SMALL TAU"),
    ('\u{1D710}', "MATHEMATICAL ITALIC SMALL UPSILON"),
    ('\u{1D711}', "MATHEMATICAL ITALIC SMALL PHI"),
    ('\u{1D712}', "MATHEMATICAL ITALIC SMALL CHI"),
    ('\u{1D713}', "MATHEMATICAL ITALIC SMALL PSI"),
    ('\u{1D714}', "MATHEMATICAL ITALIC SMALL OMEGA"),
    ('\u{1D715}', "MATHEMATICAL ITALIC PARTIAL DIFFERENTIAL"),
    ('\u{1D716}', "MATHEMATICAL ITALIC EPSILON SYMBOL"),
    ('\u{1D717}', "MATHEMATICAL ITALIC THETA SYMBOL"),
    ('\u{1D718}', "MATHEMATICAL ITALIC KAPPA SYMBOL"),
    ('\u{1D719}', "MATHEMATICAL ITALIC PHI SYMBOL"),
    ('\u{1D71A}', "MATHEMATICAL ITALIC RHO SYMBOL"),
    ('\u{1D71B}', "MATHEMATICAL ITALIC PI SYMBOL"),
    ('\u{1D71C}', "MATHEMATICAL BOLD ITALIC CAPITAL ALPHA"),
    ('\u{1D71D}', "MATHEMATICAL BOLD ITALIC CAPITAL BETA"),
    ('\u{1D71E}', "MATHEMATICAL BOLD ITALIC CAPITAL GAMMA"),
    ('\u{1D71F}', "MATHEMATICAL BOLD ITALIC CAPITAL DELTA"),
    ('\u{1D720}', "MATHEMATICAL BOLD ITALIC CAPITAL EPSILON"),
    ('\u{1D721}', "MATHEMATICAL BOLD ITALIC CAPITAL ZETA"),
    ('\u{1D722}', "MATHEMATICAL BOLD ITALIC CAPITAL ETA"),
    ('\u{1D723}', "MATHEMATICAL BOLD ITALIC CAPITAL THETA"),
    ('\u{1D724}', "MATHEMATICAL BOLD ITALIC CAPITAL IOTA"),
    ('\u{1D725}', "MATHEMATICAL BOLD ITALIC CAPITAL KAPPA"),
    ('\u{1D726}', "MATHEMATICAL BOLD ITALIC CAPITAL LAMDA"),
    ('\u{1D727}', "MATHEMATICAL BOLD ITALIC CAPITAL MU"),
    ('\u{1D728}', "MATHEMATICAL BOLD ITALIC CAPITAL NU"),
    ('\u{1D729}', "MATHEMATICAL BOLD ITALIC CAPITAL XI"),
    ('\u{1D72A}', "MATHEMATICAL BOLD ITALIC CAPITAL OMICRON"),
    ('\u{1D72B}', "MATHEMATICAL BOLD ITALIC CAPITAL PI"),
    ('\u{1D72C}', "MATHEMATICAL BOLD ITALIC CAPITAL RHO"),
    ('\u{1D72D}', "MATHEMATICAL BOLD ITALIC CAPITAL THETA SYMBOL"),
    ('\u{1D72E}', "MATHEMATICAL BOLD ITALIC CAPITAL SIGMA"),
    ('\u{1D72F}', "MATHEMATICAL BOLD ITALIC CAPITAL TAU"),
    ('\u{1D730}', "MATHEMATICAL BOLD ITALIC CAPITAL UPSILON"),
    ('\u{1D731}', "MATHEMATICAL BOLD ITALIC CAPITAL PHI"),
    ('\u{1D732}', "MATHEMATICAL BOLD ITALIC CAPITAL CHI"),
    ('\u{1D733}', "MATHEMATICAL BOLD ITALIC CAPITAL PSI"),
    ('\u{1D734}', "MATHEMATICAL BOLD ITALIC CAPITAL OMEGA"),
    ('\u{1D735}', "MATHEMATICAL BOLD ITALIC NABLA"),
    ('\u{1D736}', "MATHEMATICAL BOLD ITALIC SMALL ALPHA"),
    ('\u{1D737}', "MATHEMATICAL BOLD ITALIC SMALL BETA"),
    ('\u{1D738}', "MATHEMATICAL BOLD ITALIC SMALL GAMMA"),
    ('\u{1D739}', "MATHEMATICAL BOLD ITALIC SMALL DELTA"),
    ('\u{1D73A}', "MATHEMATICAL BOLD ITALIC SMALL EPSILON"),
    ('\u{1D73B}', "MATHEMATICAL BOLD ITALIC SMALL ZETA"),
    ('\u{1D73C}', "MATHEMATICAL BOLD ITALIC SMALL ETA"),
    ('\u{1D73D}', "MATHEMATICAL BOLD ITALIC SMALL THETA"),
    ('\u{1D73E}', "MATHEMATICAL BOLD ITALIC SMALL IOTA"),
    ('\u{1D73F}', "MATHEMATICAL BOLD ITALIC SMALL KAPPA"),
    ('\u{1D740}', "MATHEMATICAL BOLD ITALIC SMALL LAMDA"),
    ('\u{1D741}', "MATHEMATICAL BOLD ITALIC SMALL MU"),
    ('\u{1D742}', "MATHEMATICAL BOLD ITALIC SMALL NU"),
    ('\u{1D743}', "MATHEMATICAL BOLD ITALIC SMALL XI"),
    ('\u{1D744}', "MATHEMATICAL BOLD ITALIC SMALL OMICRON"),
    ('\u{1D745}', "MATHEMATICAL BOLD ITALIC SMALL PI"),
    ('\u{1D746}', "MATHEMATICAL BOLD ITALIC SMALL RHO"),
    ('\u{1D747}', "MATHEMATICAL BOLD ITALIC SMALL FINAL SIGMA"),
    ('\u{1D748}', "MATHEMATICAL BOLD ITALIC SMALL SIGMA"),
    ('\u{1D749}', "MATHEMATICAL BOLD ITALIC SMALL TAU"),
    ('\u{1D74A}', "MATHEMATICAL BOLD ITALIC SMALL UPSILON"),
    ('\u{1D74B}', "MATHEMATICAL BOLD ITALIC SMALL PHI"),
    ('\u{1D74C}', "MATHEMATICAL BOLD ITALIC SMALL CHI"),
    ('\u{1D74D}', "MATHEMATICAL BOLD ITALIC SMALL PSI"),
    ('\u{1D74E}', "MATHEMATICAL BOLD ITALIC SMALL OMEGA"),
    ('\u{1D74F}', "MATHEMATICAL BOLD ITALIC PARTIAL DIFFERENTIAL"),
    ('\u{1D750}', "MATHEMATICAL BOLD ITALIC EPSILON SYMBOL"),
    ('\u{1D751}', "MATHEMATICAL BOLD ITALIC THETA SYMBOL"),
    ('\u{1D752}', "MATHEMATICAL BOLD ITALIC KAPPA SYMBOL"),
    ('\u{1D753}', "MATHEMATICAL BOLD ITALIC PHI SYMBOL"),
    ('\u{1D754}', "MATHEMATICAL BOLD ITALIC RHO SYMBOL"),
    ('\u{1D755}', "MATHEMATICAL BOLD ITALIC PI SYMBOL"),
    ('\u{1D756}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL ALPHA"),
    ('\u{1D757}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL BETA"),
    ('\u{1D758}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL GAMMA"),
    ('\u{1D759}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL DELTA"),
    ('\u{1D75A}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL EPSILON"),
    ('\u{1D75B}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL ZETA"),
    ('\u{1D75C}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL ETA"),
    ('\u{1D75D}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL THETA"),
    ('\u{1D75E}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL IOTA"),
    ('\u{1D75F}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL KAPPA"),
    ('\u{1D760}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL LAMDA"),
    ('\u{1D761}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL MU"),
    ('\u{1D762}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL NU"),
    ('\u{1D763}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL XI"),
    ('\u{1D764}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL OMICRON"),
    ('\u{1D765}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL PI"),
    ('\u{1D766}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL RHO"),
    ('\u{1D767}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL THETA SYMBOL"),
    ('\u{1D768}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL SIGMA"),
    ('\u{1D769}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL TAU"),
    ('\u{1D76A}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL UPSILON"),
    ('\u{1D76B}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL PHI"),
    ('\u{1D76C}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL CHI"),
    ('\u{1D76D}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL PSI"),
    ('\u{1D76E}', "MATHEMATICAL SANS-SERIF BOLD CAPITAL OMEGA"),
    ('\u{1D76F}', "MATHEMATICAL SANS-SERIF BOLD NABLA"),
    ('\u{1D770}', "MATHEMATICAL SANS-SERIF BOLD SMALL ALPHA"),
    ('\u{1D771}', "MATHEMATICAL SANS-SERIF BOLD SMALL BETA"),
    ('\u{1D772}', "MATHEMATICAL SANS-SERIF BOLD SMALL GAMMA"),
    ('\u{1D773}', "MATHEMATICAL SANS-SERIF BOLD SMALL DELTA"),
    ('\u{1D774}', "MATHEMATICAL SANS-SERIF BOLD SMALL EPSILON"),
    ('\u{1D775}', "MATHEMATICAL SANS-SERIF BOLD SMALL ZETA"),
    ('\u{1D776}', "MATHEMATICAL SANS-SERIF BOLD SMALL ETA"),
    ('\u{1D777}', "MATHEMATICAL SANS-SERIF BOLD SMALL THETA"),
    ('\u{1D778}', "MATHEMATICAL SANS-SERIF BOLD SMALL IOTA"),
    ('\u{1D779}', "MATHEMATICAL SANS-SERIF BOLD SMALL KAPPA"),
    ('\u{1D77A}', "MATHEMATICAL SANS-SERIF BOLD SMALL LAMDA"),
    ('\u{1D77B}', "MATHEMATICAL SANS-SERIF BOLD SMALL MU"),
    ('\u{1D77C}', "MATHEMATICAL SANS-SERIF BOLD SMALL NU"),
    ('\u{1D77D}', "MATHEMATICAL SANS-SERIF BOLD SMALL XI"),
    ('\u{1D77E}', "MATHEMATICAL SANS-SERIF BOLD SMALL OMICRON"),
    ('\u{1D77F}', "MATHEMATICAL SANS-SERIF BOLD SMALL PI"),
    ('\u{1D780}', "MATHEMATICAL SANS-SERIF BOLD SMALL RHO"),
    ('\u{1D781}', "MATHEMATICAL SANS-SERIF BOLD SMALL FINAL SIGMA"),
    ('\u{1D782}', "MATHEMATICAL SANS-SERIF BOLD SMALL SIGMA"),
    ('\u{1D783}', "MATHEMATICAL SANS-SERIF BOLD SMALL TAU"),
    ('\u{1D784}', "MATHEMATICAL SANS-SERIF BOLD SMALL UPSILON"),
    ('\u{1D785}', "MATHEMATICAL SANS-SERIF BOLD SMALL PHI"),
    ('\u{1D786}', "MATHEMATICAL SANS-SERIF BOLD SMALL CHI"),
    ('\u{1D787}', "MATHEMATICAL SANS-SERIF BOLD SMALL PSI"),
    ('\u{1D788}', "MATHEMATICAL SANS-SERIF BOLD SMALL OMEGA"),
    ('\u{1D789}', "MATHEMATICAL SANS-SERIF BOLD PARTIAL DIFFERENTIAL"),
    ('\u{1D78A}', "MATHEMATICAL SANS-SERIF BOLD EPSILON SYMBOL"),
    ('\u{1D78B}', "MATHEMATICAL SANS-SERIF BOLD THETA SYMBOL"),
    ('\u{1D78C}', "MATHEMATICAL SANS-SERIF BOLD KAPPA SYMBOL"),
    ('\u{1D78D}', "MATHEMATICAL SANS-SERIF BOLD PHI SYMBOL"),
    ('\u{1D78E}', "MATHEMATICAL SANS-SERIF BOLD RHO SYMBOL"),
    ('\u{1D78F}', "MATHEMATICAL SANS-SERIF BOLD PI SYMBOL"),
    ('\u{1D790}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ALPHA"),
    ('\u{1D791}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL BETA"),
    ('\u{1D792}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL GAMMA"),
    ('\u{1D793}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL DELTA"),
    ('\u{1D794}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL EPSILON"),
    ('\u{1D795}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ZETA"),
    ('\u{1D796}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL ETA"),
    ('\u{1D797}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL THETA"),
    ('\u{1D798}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL IOTA"),
    ('\u{1D799}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL KAPPA"),
    ('\u{1D79A}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL LAMDA"),
    ('\u{1D79B}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL MU"),
    ('\u{1D79C}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL NU"),
    ('\u{1D79D}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL XI"),
    ('\u{1D79E}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL OMICRON"),
    ('\u{1D79F}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PI"),
    ('\u{1D7A0}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL RHO"),
    ('\u{1D7A1}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL THETA SYMBOL"),
    ('\u{1D7A2}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL SIGMA"),
    ('\u{1D7A3}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL TAU"),
    ('\u{1D7A4}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL UPSILON"),
    ('\u{1D7A5}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PHI"),
    ('\u{1D7A6}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL CHI"),
    ('\u{1D7A7}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL PSI"),
    ('\u{1D7A8}', "MATHEMATICAL SANS-SERIF BOLD ITALIC CAPITAL OMEGA"),
    ('\u{1D7A9}', "MATHEMATICAL SANS-SERIF BOLD ITALIC NABLA"),
    ('\u{1D7AA}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ALPHA"),
    ('\u{1D7AB}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL BETA"),
    ('\u{1D7AC}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL GAMMA"),
    ('\u{1D7AD}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL DELTA"),
    ('\u{1D7AE}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL EPSILON"),
    ('\u{1D7AF}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ZETA"),
    ('\u{1D7B0}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL ETA"),
    ('\u{1D7B1}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL THETA"),
    ('\u{1D7B2}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL IOTA"),
    ('\u{1D7B3}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL KAPPA"),
    ('\u{1D7B4}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL LAMDA"),
    ('\u{1D7B5}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL MU"),
    ('\u{1D7B6}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL NU"),
    ('\u{1D7B7}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL XI"),
    ('\u{1D7B8}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL OMICRON"),
    ('\u{1D7B9}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PI"),
    ('\u{1D7BA}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL RHO"),
    ('\u{1D7BB}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL FINAL SIGMA"),
    ('\u{1D7BC}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL SIGMA"),
    ('\u{1D7BD}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL TAU"),
    ('\u{1D7BE}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL UPSILON"),
    ('\u{1D7BF}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PHI"),
    ('\u{1D7C0}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL CHI"),
    ('\u{1D7C1}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL PSI"),
    ('\u{1D7C2}', "MATHEMATICAL SANS-SERIF BOLD ITALIC SMALL OMEGA"),
    ('\u{1D7C3}', "MATHEMATICAL SANS-SERIF BOLD ITALIC PARTIAL DIFFERENTIAL"),
    ('\u{1D7C4}', "MATHEMATICAL SANS-SERIF BOLD ITALIC EPSILON SYMBOL"),
    ('\u{1D7C5}', "MATHEMATICAL SANS-SERIF BOLD ITALIC THETA SYMBOL"),
    ('\u{1D7C6}', "MATHEMATICAL SANS-SERIF BOLD ITALIC KAPPA SYMBOL"),
    ('\u{1D7C7}', "MATHEMATICAL SANS-SERIF BOLD ITALIC PHI SYMBOL"),
    ('\u{1D7C8}', "MATHEMATICAL SANS-SERIF BOLD ITALIC RHO SYMBOL"),
    ('\u{1D7C9}', "MATHEMATICAL SANS-SERIF BOLD ITALIC PI SYMBOL"),
    ('\u{1D7CA}', "MATHEMATICAL BOLD CAPITAL DIGAMMA"),
    ('\u{1D7CB}', "MATHEMATICAL BOLD SMALL DIGAMMA"),
    ('\u{1D7CE}', "MATHEMATICAL BOLD DIGIT ZERO"),
    ('\u{1D7CF}', "MATHEMATICAL BOLD DIGIT ONE"),
    ('\u{1D7D0}', "MATHEMATICAL BOLD DIGIT TWO"),
    ('\u{1D7D1}', "MATHEMATICAL BOLD DIGIT THREE"),
    ('\u{1D7D2}', "MATHEMATICAL BOLD DIGIT FOUR"),
    ('\u{1D7D3}', "MATHEMATICAL BOLD DIGIT FIVE"),
    ('\u{1D7D4}', "MATHEMATICAL BOLD DIGIT SIX"),
    ('\u{1D7D5}', "MATHEMATICAL BOLD DIGIT SEVEN"),
    ('\u{1D7D6}', "MATHEMATICAL BOLD DIGIT EIGHT"),
    ('\u{1D7D7}', "MATHEMATICAL BOLD DIGIT NINE"),
    ('\u{1D7D8}', "MATHEMATICAL DOUBLE-STRUCK DIGIT ZERO"),
    ('\u{1D7D9}', "MATHEMATICAL DOUBLE-STRUCK DIGIT ONE"),
    ('\u{1D7DA}', "MATHEMATICAL DOUBLE-STRUCK DIGIT TWO"),
    ('\u{1D7DB}', "MATHEMATICAL DOUBLE-STRUCK DIGIT THREE"),
    ('\u{1D7DC}', "MATHEMATICAL DOUBLE-STRUCK DIGIT FOUR"),
    ('\u{1D7DD}', "MATHEMATICAL DOUBLE-STRUCK DIGIT FIVE"),
    ('\u{1D7DE}', "MATHEMATICAL DOUBLE-STRUCK DIGIT SIX"),
    ('\u{1D7DF}', "MATHEMATICAL DOUBLE-STRUCK DIGIT SEVEN"),
    ('\u{1D7E0}', "MATHEMATICAL DOUBLE-STRUCK DIGIT EIGHT"),
    ('\u{1D7E1}', "MATHEMATICAL DOUBLE-STRUCK DIGIT NINE"),
    ('\u{1D7E2}', "MATHEMATICAL SANS-SERIF DIGIT ZERO"),
    ('\u{1D7E3}', "MATHEMATICAL SANS-SERIF DIGIT ONE"),
    ('\u{1D7E4}', "MATHEMATICAL SANS-SERIF DIGIT TWO"),
    ('\u{1D7E5}', "MATHEMATICAL SANS-SERIF DIGIT THREE"),
    ('\u{1D7E6}', "MATHEMATICAL SANS-SERIF DIGIT FOUR"),
    ('\u{1D7E7}', "MATHEMATICAL SANS-SERIF DIGIT FIVE"),
    ('\u{1D7E8}', "MATHEMATICAL SANS-SERIF DIGIT SIX"),
    ('\u{1D7E9}', "MATHEMATICAL SANS-SERIF DIGIT SEVEN"),
    ('\u{1D7EA}', "MATHEMATICAL SANS-SERIF DIGIT EIGHT"),
    ('\u{1D7EB}', "MATHEMATICAL SANS-SERIF DIGIT NINE"),
    ('\u{1D7EC}', "MATHEMATICAL SANS-SERIF BOLD DIGIT ZERO"),
    ('\u{1D7ED}', "MATHEMATICAL SANS-SERIF BOLD DIGIT ONE"),
    ('\u{1D7EE}', "MATHEMATICAL SANS-SERIF BOLD DIGIT TWO"),
    ('\u{1D7EF}', "MATHEMATICAL SANS-SERIF BOLD DIGIT THREE"),
    ('\u{1D7F0}', "MATHEMATICAL SANS-SERIF BOLD DIGIT FOUR"),
    ('\u{1D7F1}', "MATHEMATICAL SANS-SERIF BOLD DIGIT FIVE"),
    ('\u{1D7F2}', "MATHEMATICAL SANS-SERIF BOLD DIGIT SIX"),
    ('\u{1D7F3}', "MATHEMATICAL SANS-SERIF BOLD DIGIT SEVEN"),
    ('\u{1D7F4}', "MATHEMATICAL SANS-SERIF BOLD DIGIT EIGHT"),
    ('\u{1D7F5}', "MATHEMATICAL SANS-SERIF BOLD DIGIT NINE"),
    ('\u{1D7F6}', "MATHEMATICAL MONOSPACE DIGIT ZERO"),
    ('\u{1D7F7}', "MATHEMATICAL MONOSPACE DIGIT ONE"),
    ('\u{1D7F8}', "MATHEMATICAL MONOSPACE DIGIT TWO"),
    ('\u{1D7F9}', "MATHEMATICAL MONOSPACE DIGIT THREE"),
    ('\u{1D7FA}', "MATHEMATICAL MONOSPACE DIGIT FOUR"),
    ('\u{1D7FB}', "MATHEMATICAL MONOSPACE DIGIT FIVE"),
    ('\u{1D7FC}', "MATHEMATICAL MONOSPACE DIGIT SIX"),
    ('\u{1D7FD}', "MATHEMATICAL MONOSPACE DIGIT SEVEN"),
    ('\u{1D7FE}', "MATHEMATICAL MONOSPACE DIGIT EIGHT"),
    ('\u{1D7FF}', "MATHEMATICAL MONOSPACE DIGIT NINE"),
    ('\u{1EE00}', "ARABIC MATHEMATICAL ALEF"),
    ('\u{1EE01}', "ARABIC MATHEMATICAL BEH"),
    ('\u{1EE02}', "ARABIC MATHEMATICAL JEEM"),
    ('\u{1EE03}', "ARABIC MATHEMATICAL DAL"),
    ('\u{1EE05}', "ARABIC MATHEMATICAL WAW"),
    ('\u{1EE06}', "ARABIC MATHEMATICAL ZAIN"),
    ('\u{1EE07}', "ARABIC MATHEMATICAL HAH"),
    ('\u{1EE08}', "ARABIC MATHEMATICAL TAH"),
    ('\u{1EE09}', "ARABIC MATHEMATICAL YEH"),
    ('\u{1EE0A}', "ARABIC MATHEMATICAL KAF"),
    ('\u{1EE0B}', "ARABIC MATHEMATICAL LAM"),
    ('\u{1EE0C}', "ARABIC MATHEMATICAL MEEM"),
    ('\u{1EE0D}', "ARABIC MATHEMATICAL NOON"),
    ('\u{1EE0E}', "ARABIC MATHEMATICAL SEEN"),
    ('\u{1EE0F}', "ARABIC MATHEMATICAL AIN"),
    ('\u{1EE10}', "ARABIC MATHEMATICAL FEH"),
    ('\u{1EE11}', "ARABIC MATHEMATICAL SAD"),
    ('\u{1EE12}', "ARABIC MATHEMATICAL QAF"),
    ('\u{1EE13}', "ARABIC MATHEMATICAL REH"),
    ('\u{1EE14}', "ARABIC MATHEMATICAL SHEEN"),
    ('\u{1EE15}', "ARABIC MATHEMATICAL TEH"),
    ('\u{1EE16}', "ARABIC MATHEMATICAL THEH"),
    ('\u{1EE17}', "ARABIC MATHEMATICAL KHAH"),
    ('\u{1EE18}', "ARABIC MATHEMATICAL THAL"),
    ('\u{1EE19}', "ARABIC MATHEMATICAL DAD"),
    ('\u{1EE1A}', "ARABIC MATHEMATICAL ZAH"),
    ('\u{1EE1B}', "ARABIC MATHEMATICAL GHAIN"),
    ('\u{1EE1C}', "ARABIC MATHEMATICAL DOTLESS BEH"),
    ('\u{1EE1D}', "ARABIC MATHEMATICAL DOTLESS NOON"),
    ('\u{1EE1E}', "ARABIC MATHEMATICAL DOTLESS FEH"),
    ('\u{1EE1F}', "ARABIC MATHEMATICAL DOTLESS QAF"),
    ('\u{1EE21}', "ARABIC MATHEMATICAL INITIAL BEH"),
    ('\u{1EE22}', "ARABIC MATHEMATICAL INITIAL JEEM"),
    ('\u{1EE24}', "ARABIC MATHEMATICAL INITIAL HEH"),
    ('\u{1EE27}', "ARABIC MATHEMATICAL INITIAL HAH"),
    ('\u{1EE29}', "ARABIC MATHEMATICAL INITIAL YEH"),
    ('\u{1EE2A}', "ARABIC MATHEMATICAL INITIAL KAF"),
    ('\u{1EE2B}', "ARABIC MATHEMATICAL INITIAL LAM"),
    ('\u{1EE2C}', "ARABIC MATHEMATICAL INITIAL MEEM"),
    ('\u{1EE2D}', "ARABIC MATHEMATICAL INITIAL NOON"),
    ('\u{1EE2E}', "ARABIC MATHEMATICAL INITIAL SEEN"),
    ('\u{1EE2F}', "ARABIC MATHEMATICAL INITIAL AIN"),
    ('\u{1EE30}', "ARABIC MATHEMATICAL INITIAL FEH"),
    ('\u{1EE31}', "ARABIC MATHEMATICAL INITIAL SAD"),
    ('\u{1EE32}', "ARABIC MATHEMATICAL INITIAL QAF"),
    ('\u{1EE34}', "ARABIC MATHEMATICAL INITIAL SHEEN"),
    ('\u{1EE35}', "ARABIC MATHEMATICAL INITIAL TEH"),
    ('\u{1EE36}', "ARABIC MATHEMATICAL INITIAL THEH"),
    ('\u{1EE37}', "ARABIC MATHEMATICAL INITIAL KHAH"),
    ('\u{1EE39}', "ARABIC MATHEMATICAL INITIAL DAD"),
    ('\u{1EE3B}', "ARABIC MATHEMATICAL INITIAL GHAIN"),
    ('\u{1EE42}', "ARABIC MATHEMATICAL TAILED JEEM"),
    ('\u{1EE47}', "ARABIC MATHEMATICAL TAILED HAH"),
    ('\u{1EE49}', "ARABIC MATHEMATICAL TAILED YEH"),
    ('\u{1EE4B}', "ARABIC MATHEMATICAL TAILED LAM"),
    ('\u{1EE4D}', "ARABIC MATHEMATICAL TAILED NOON"),
    ('\u{1EE4E}', "ARABIC MATHEMATICAL TAILED SEEN"),
    ('\u{1EE4F}', "ARABIC MATHEMATICAL TAILED AIN"),
    ('\u{1EE51}', "ARABIC MATHEMATICAL TAILED SAD"),
    ('\u{1EE52}', "ARABIC MATHEMATICAL TAILED QAF"),
    ('\u{1EE54}', "ARABIC MATHEMATICAL TAILED SHEEN"),
    ('\u{1EE57}', "ARABIC MATHEMATICAL TAILED KHAH"),
    ('\u{1EE59}', "ARABIC MATHEMATICAL TAILED DAD"),
    ('\u{1EE5B}', "ARABIC MATHEMATICAL TAILED GHAIN"),
    ('\u{1EE5D}', "ARABIC MATHEMATICAL TAILED DOTLESS NOON"),
    ('\u{1EE5F}', "ARABIC MATHEMATICAL TAILED DOTLESS QAF"),
    ('\u{1EE61}', "ARABIC MATHEMATICAL STRETCHED BEH"),
    ('\u{1EE62}', "ARABIC MATHEMATICAL STRETCHED JEEM"),
    ('\u{1EE64}', "ARABIC MATHEMATICAL STRETCHED HEH"),
    ('\u{1EE67}', "ARABIC MATHEMATICAL STRETCHED HAH"),
    ('\u{1EE68}', "ARABIC MATHEMATICAL STRETCHED TAH"),
    ('\u{1EE69}', "ARABIC MATHEMATICAL STRETCHED YEH"),
    ('\u{1EE6A}', "ARABIC MATHEMATICAL STRETCHED KAF"),
    ('\u{1EE6C}', "ARABIC MATHEMATICAL STRETCHED MEEM"),
    ('\u{1EE6D}', "ARABIC MATHEMATICAL STRETCHED NOON"),
    ('\u{1EE6E}', "ARABIC MATHEMATICAL STRETCHED SEEN"),
    ('\u{1EE6F}', "ARABIC MATHEMATICAL STRETCHED AIN"),
    ('\u{1EE70}', "ARABIC MATHEMATICAL STRETCHED FEH"),
    ('\u{1EE71}', "ARABIC MATHEMATICAL STRETCHED SAD"),
    ('\u{1EE72}', "ARABIC MATHEMATICAL STRETCHED QAF"),
    ('\u{1EE74}', "ARABIC MATHEMATICAL STRETCHED SHEEN"),
    ('\u{1EE75}', "ARABIC MATHEMATICAL STRETCHED TEH"),
    ('\u{1EE76}', "ARABIC MATHEMATICAL STRETCHED THEH"),
    ('\u{1EE77}', "ARABIC MATHEMATICAL STRETCHED KHAH"),
    ('\u{1EE79}', "ARABIC MATHEMATICAL STRETCHED DAD"),
    ('\u{1EE7A}', "ARABIC MATHEMATICAL STRETCHED ZAH"),
    ('\u{1EE7B}', "ARABIC MATHEMATICAL STRETCHED GHAIN"),
    ('\u{1EE7C}', "ARABIC MATHEMATICAL STRETCHED DOTLESS BEH"),
    ('\u{1EE7E}', "ARABIC MATHEMATICAL STRETCHED DOTLESS FEH"),
    ('\u{1EE80}', "ARABIC MATHEMATICAL LOOPED ALEF"),
    ('\u{1EE81}', "ARABIC MATHEMATICAL LOOPED BEH"),
    ('\u{1EE82}', "ARABIC MATHEMATICAL LOOPED JEEM"),
    ('\u{1EE83}', "ARABIC MATHEMATICAL LOOPED DAL"),
    ('\u{1EE84}', "ARABIC MATHEMATICAL LOOPED HEH"),
    ('\u{1EE85}', "ARABIC MATHEMATICAL LOOPED WAW"),
    ('\u{1EE86}', "ARABIC MATHEMATICAL LOOPED ZAIN"),
    ('\u{1EE87}', "ARABIC MATHEMATICAL LOOPED HAH"),
    ('\u{1EE88}', "ARABIC MATHEMATICAL LOOPED TAH"),
    ('\u{1EE89}', "ARABIC MATHEMATICAL LOOPED YEH"),
    ('\u{1EE8B}', "ARABIC MATHEMATICAL LOOPED LAM"),
    ('\u{1EE8C}', "ARABIC MATHEMATICAL LOOPED MEEM"),
    ('\u{1EE8D}', "ARABIC MATHEMATICAL LOOPED NOON"),
    ('\u{1EE8E}', "ARABIC MATHEMATICAL LOOPED SEEN"),
    ('\u{1EE8F}', "ARABIC MATHEMATICAL LOOPED AIN"),
    ('\u{1EE90}', "ARABIC MATHEMATICAL LOOPED FEH"),
    ('\u{1EE91}', "ARABIC MATHEMATICAL LOOPED SAD"),
    ('\u{1EE92}', "ARABIC MATHEMATICAL LOOPED QAF"),
    ('\u{1EE93}', "ARABIC MATHEMATICAL LOOPED REH"),
    ('\u{1EE94}', "ARABIC MATHEMATICAL LOOPED SHEEN"),
    ('\u{1EE95}', "ARABIC MATHEMATICAL LOOPED TEH"),
    ('\u{1EE96}', "ARABIC MATHEMATICAL LOOPED THEH"),
    ('\u{1EE97}', "ARABIC MATHEMATICAL LOOPED KHAH"),
    ('\u{1EE98}', "ARABIC MATHEMATICAL LOOPED THAL"),
    ('\u{1EE99}', "ARABIC MATHEMATICAL LOOPED DAD"),
    ('\u{1EE9A}', "ARABIC MATHEMATICAL LOOPED ZAH"),
    ('\u{1EE9B}', "ARABIC MATHEMATICAL LOOPED GHAIN"),
    ('\u{1EEA1}', "ARABIC MATHEMATICAL DOUBLE-STRUCK BEH"),
    ('\u{1EEA2}', "ARABIC MATHEMATICAL DOUBLE-STRUCK JEEM"),
    ('\u{1EEA3}', "ARABIC MATHEMATICAL DOUBLE-STRUCK DAL"),
    ('\u{1EEA5}', "ARABIC MATHEMATICAL DOUBLE-STRUCK WAW"),
    ('\u{1EEA6}', "ARABIC MATHEMATICAL DOUBLE-STRUCK ZAIN"),
    ('\u{1EEA7}', "ARABIC MATHEMATICAL DOUBLE-STRUCK HAH"),
    ('\u{1EEA8}', "ARABIC MATHEMATICAL DOUBLE-STRUCK TAH"),
    ('\u{1EEA9}', "ARABIC MATHEMATICAL DOUBLE-STRUCK YEH"),
    ('\u{1EEAB}', "ARABIC MATHEMATICAL DOUBLE-STRUCK LAM"),
    ('\u{1EEAC}', "ARABIC MATHEMATICAL DOUBLE-STRUCK MEEM"),
    ('\u{1EEAD}', "ARABIC MATHEMATICAL DOUBLE-STRUCK NOON"),
    ('\u{1EEAE}', "ARABIC MATHEMATICAL DOUBLE-STRUCK SEEN"),
    ('\u{1EEAF}', "ARABIC MATHEMATICAL DOUBLE-STRUCK AIN"),
    ('\u{1EEB0}', "ARABIC MATHEMATICAL DOUBLE-STRUCK FEH"),
    ('\u{1EEB1}', "ARABIC MATHEMATICAL DOUBLE-STRUCK SAD"),
    ('\u{1EEB2}', "ARABIC MATHEMATICAL DOUBLE-STRUCK QAF"),
    ('\u{1EEB3}', "ARABIC MATHEMATICAL DOUBLE-STRUCK REH"),
    ('\u{1EEB4}', "ARABIC MATHEMATICAL DOUBLE-STRUCK SHEEN"),
    ('\u{1EEB5}', "ARABIC MATHEMATICAL DOUBLE-STRUCK TEH"),
    ('\u{1EEB6}', "ARABIC MATHEMATICAL DOUBLE-STRUCK THEH"),
    ('\u{1EEB7}', "ARABIC MATHEMATICAL DOUBLE-STRUCK KHAH"),
    ('\u{1EEB8}', "ARABIC MATHEMATICAL DOUBLE-STRUCK THAL"),
    ('\u{1EEB9}', "ARABIC MATHEMATICAL DOUBLE-STRUCK DAD"),
    ('\u{1EEBA}', "ARABIC MATHEMATICAL DOUBLE-STRUCK ZAH"),
    ('\u{1EEBB}', "ARABIC MATHEMATICAL DOUBLE-STRUCK GHAIN"),
    ('\u{1F100}', "DIGIT ZERO FULL STOP"),
    ('\u{1F101}', "DIGIT ZERO COMMA"),
    ('\u{1F102}', "DIGIT ONE COMMA"),
    ('\u{1F103}', "DIGIT TWO COMMA"),
    ('\u{1F104}', "DIGIT THREE COMMA"),
    ('\u{1F105}', "DIGIT FOUR COMMA"),
    ('\u{1F106}', "DIGIT FIVE COMMA"),
    ('\u{1F107}', "DIGIT SIX COMMA"),
    ('\u{1F108}', "DIGIT SEVEN COMMA"),
    ('\u{1F109}', "DIGIT EIGHT COMMA"),
    ('\u{1F10A}', "DIGIT NINE COMMA"),
    ('\u{1F110}', "PARENTHESIZED LATIN CAPITAL LETTER A"),
    ('\u{1F111}', "PARENTHESIZED LATIN CAPITAL LETTER B"),
    ('\u{1F112}', "PARENTHESIZED LATIN CAPITAL LETTER C"),
    ('\u{1F113}', "PARENTHESIZED LATIN CAPITAL LETTER D"),
    ('\u{1F114}', "PARENTHESIZED LATIN CAPITAL LETTER E"),
    ('\u{1F115}', "PARENTHESIZED LATIN CAPITAL LETTER F"),
    ('\u{1F116}', "PARENTHESIZED LATIN CAPITAL LETTER G"),
    ('\u{1F117}', "PARENTHESIZED LATIN CAPITAL LETTER H"),
    ('\u{1F118}', "PARENTHESIZED LATIN CAPITAL LETTER I"),
    ('\u{1F119}', "PARENTHESIZED LATIN CAPITAL LETTER J"),
    ('\u{1F11A}', "PARENTHESIZED LATIN CAPITAL LETTER K"),
    ('\u{1F11B}', "PARENTHESIZED LATIN CAPITAL LETTER L"),
    ('\u{1F11C}', "PARENTHESIZED LATIN CAPITAL LETTER M"),
    ('\u{1F11D}', "PARENTHESIZED LATIN CAPITAL LETTER N"),
    ('\u{1F11E}', "PARENTHESIZED LATIN CAPITAL LETTER O"),
    ('\u{1F11F}', "PARENTHESIZED LATIN CAPITAL LETTER P"),
    ('\u{1F120}', "PARENTHESIZED LATIN CAPITAL LETTER Q"),
    ('\u{1F121}', "PARENTHESIZED LATIN CAPITAL LETTER R"),
    ('\u{1F122}', "PARENTHESIZED LATIN CAPITAL LETTER S"),
    ('\u{1F123}', "PARENTHESIZED LATIN CAPITAL LETTER T"),
    ('\u{1F124}', "PARENTHESIZED LATIN CAPITAL LETTER U"),
    ('\u{1F125}', "PARENTHESIZED LATIN CAPITAL LETTER V"),
    ('\u{1F126}', "PARENTHESIZED LATIN CAPITAL LETTER W"),
    ('\u{1F127}', "PARENTHESIZED LATIN CAPITAL LETTER X"),
    ('\u{1F128}', "PARENTHESIZED LATIN CAPITAL LETTER Y"),
    ('\u{1F129}', "PARENTHESIZED LATIN CAPITAL LETTER Z"),
    ('\u{1F12A}', "TORTOISE SHELL BRACKETED LATIN CAPITAL LETTER S"),
    ('\u{1F240}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-672C"),
    ('\u{1F241}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-4E09"),
    ('\u{1F242}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-4E8C"),
    ('\u{1F243}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-5B89"),
    ('\u{1F244}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-70B9"),
    ('\u{1F245}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-6253"),
    ('\u{1F246}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-76D7"),
    ('\u{1F247}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-52DD"),
    ('\u{1F248}', "TORTOISE SHELL BRACKETED CJK UNIFIED IDEOGRAPH-6557"),
    ('\u{1FBF0}', "SEGMENTED DIGIT ZERO"),
    ('\u{1FBF1}', "SEGMENTED DIGIT ONE"),
    ('\u{1FBF2}', "SEGMENTED DIGIT TWO"),
    ('\u{1FBF3}', "SEGMENTED DIGIT THREE"),
    ('\u{1FBF4}', "SEGMENTED DIGIT FOUR"),
    ('\u{1FBF5}', "SEGMENTED DIGIT FIVE"),
    ('\u{1FBF6}', "SEGMENTED DIGIT SIX"),
    ('\u{1FBF7}', "SEGMENTED DIGIT SEVEN"),
    ('\u{1FBF8}', "SEGMENTED DIGIT EIGHT"),
    ('\u{1FBF9}', "SEGMENTED DIGIT NINE"),
];
