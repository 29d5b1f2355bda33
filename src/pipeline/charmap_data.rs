//! Character tables generated by `hanconv build-map`.
//!
//! Do not edit by hand: regenerate from the dictionary source instead.
//! `SIMPLIFIED[i]` and `TRADITIONAL[i]` form one mapping pair; both
//! constants hold the same number of characters.

pub const SIMPLIFIED: &str = "\
万与专业丛东丝两严丧个丰临为丽举义乌乐乔习乡书买乱争亏云亚产亩亲\
亿仅从仓仪们价众优会伞伟传伤伦伪体佣侠侣侥侦侧侨俭债倾偿储儿兑兰\
关兴兹养兽内冈册写军农冯冲决况冻净凉减凑凤凭凯击刘则刚创删剂剑剧\
劳势勋匀华协单卖卢卫厂厅历厉压厌厕厨县双发变叙叠只叶号叹吓吕吗吨\
听启吴呕员呜响哑哗唤啸喷嘱团园围国图圆圣场坏块坚坛坟坠垄垫尘堕墙\
壮声壳处备复夹夺奋奖妇妈妆娄娇婶娱婴婵孙学孪宁宝实宠审宪宫对寻导\
寿将尔尝层屉届属屡岁岂峡岛峦崭巩币帅师帐帜带帮广庄庆库应庙废开异\
弃张弥弯弹强归当录彻径忆忧怀态怜总恋恳恶悬惊惧惨惩愤愿慑懒戏战户\
扑执扩扫扬抚抛抢护报担拟拢拣拥拦择挂挡挣挤挥捞损捡换据掷搀摄摆摇\
撑断无旧时旷昼显晋晒晓晕暂术朴机杀杂权条来杨极构枪柜标栏树样桥档\
欢欧歼残殴毁毕毙气氢汇汉汤沟沧泞泪泽洁浅浆浇浊测济浏浑浓涂涛润涨\
渊渐渔温湾湿溃滚满滤滥滨灭灯灵灾炉点炼烂烛烟热焕爱爷牍牵犹狈狱猎\
猫献玛环现珑琼瑶电画畅疗疯痒痪瘫盐监盖盘睁矫矿码砖础硕确碍礼祸禅\
离种积称秆稳穷窃窍窑窜窝竞笔笋筛筹签简箩篮籁类粪粮紧纠红纤约级纪\
纫纯纱纲纳纵纷纸纹纺线练组绅细织终绍经绑绒结绕绘给络绝统绢绣继绩\
绪续绳维绵综绿缄缅缆缉缎缓缔缕编缘缚缝缠缩缴罚罢罗羡翘耸联聋职聪\
肃肠肤肾肿胀胁脉脏脑脸腊腻腾舆舰舱艰艳节芦苍苏苹茎荐荚药荣荤荫莱\
莲获萝营萧萨葱蒋蓝蔷蕴虏虑虚虫虽虾蚀蚁蚂蛮蜗蝇蝉补衬袄装裤见观规\
视览觉誉誊计订认讥讨让训议讯记讲讳许论讼讽设访诀证评识诈诉诊词译\
试诗诚话诞询该详诫误诱说诵请诸诺读课谁调谅谈谊谋谜谢谣谦谨谱谴贝\
贞负贡财责贤败货质贩贪贫购贮贯贴贵贷贸费贺贼贾赁资赋赌赎赏赐赔赖\
赚赛赞赠赢赵趋跃践踊躏车轧轨转轮软轰轴轻载较辅辆辈辉输辖辗辞辩边\
达迁过迈运还这进远违连迟迹适选逊递逻遗邓邮邹郑酿释鉴针钉钓钗钙钝\
钞钟钠钢钥钦钧钩钱钳钻铁铃铅铜铝铭银铸铺链销锁锄锅锈锋锐错锚锤锦\
键锻镇镜镰长门闪闭问闯闰闲间闷闸闹闻阀阁阅阐阔队阳阴阵阶际陆陈隐\
随隶难雏雾静韦韵页顶顷项顺须顽顾顿颂预颅领颇颈频颖颗题颜额风飘飞\
饥饭饮饰饱饲饶饺饼馆馈馒马驭驰驱驳驴驶驹驻驼驾骂骄骆骇骑骗骚骡骤\
鱼鲁鲜鲤鲸鳞鳄鸟鸡鸣鸦鸭鸽鸿鹃鹅鹊鹏鹤鹰麦黄党齐齿龄龙龟斋龚凿卤";

pub const TRADITIONAL: &str = "\
萬與專業叢東絲兩嚴喪個豐臨為麗舉義烏樂喬習鄉書買亂爭虧雲亞產畝親\
億僅從倉儀們價眾優會傘偉傳傷倫偽體傭俠侶僥偵側僑儉債傾償儲兒兌蘭\
關興茲養獸內岡冊寫軍農馮沖決況凍淨涼減湊鳳憑凱擊劉則剛創刪劑劍劇\
勞勢勳勻華協單賣盧衛廠廳歷厲壓厭廁廚縣雙發變敘疊隻葉號嘆嚇呂嗎噸\
聽啟吳嘔員嗚響啞嘩喚嘯噴囑團園圍國圖圓聖場壞塊堅壇墳墜壟墊塵墮牆\
壯聲殼處備復夾奪奮獎婦媽妝婁嬌嬸娛嬰嬋孫學孿寧寶實寵審憲宮對尋導\
壽將爾嘗層屜屆屬屢歲豈峽島巒嶄鞏幣帥師帳幟帶幫廣莊慶庫應廟廢開異\
棄張彌彎彈強歸當錄徹徑憶憂懷態憐總戀懇惡懸驚懼慘懲憤願懾懶戲戰戶\
撲執擴掃揚撫拋搶護報擔擬攏揀擁攔擇掛擋掙擠揮撈損撿換據擲攙攝擺搖\
撐斷無舊時曠晝顯晉曬曉暈暫術樸機殺雜權條來楊極構槍櫃標欄樹樣橋檔\
歡歐殲殘毆毀畢斃氣氫匯漢湯溝滄濘淚澤潔淺漿澆濁測濟瀏渾濃塗濤潤漲\
淵漸漁溫灣濕潰滾滿濾濫濱滅燈靈災爐點煉爛燭煙熱煥愛爺牘牽猶狽獄獵\
貓獻瑪環現瓏瓊瑤電畫暢療瘋癢瘓癱鹽監蓋盤睜矯礦碼磚礎碩確礙禮禍禪\
離種積稱稈穩窮竊竅窯竄窩競筆筍篩籌簽簡籮籃籟類糞糧緊糾紅纖約級紀\
紉純紗綱納縱紛紙紋紡線練組紳細織終紹經綁絨結繞繪給絡絕統絹繡繼績\
緒續繩維綿綜綠緘緬纜緝緞緩締縷編緣縛縫纏縮繳罰罷羅羨翹聳聯聾職聰\
肅腸膚腎腫脹脅脈臟腦臉臘膩騰輿艦艙艱艷節蘆蒼蘇蘋莖薦莢藥榮葷蔭萊\
蓮獲蘿營蕭薩蔥蔣藍薔蘊虜慮虛蟲雖蝦蝕蟻螞蠻蝸蠅蟬補襯襖裝褲見觀規\
視覽覺譽謄計訂認譏討讓訓議訊記講諱許論訟諷設訪訣證評識詐訴診詞譯\
試詩誠話誕詢該詳誡誤誘說誦請諸諾讀課誰調諒談誼謀謎謝謠謙謹譜譴貝\
貞負貢財責賢敗貨質販貪貧購貯貫貼貴貸貿費賀賊賈賃資賦賭贖賞賜賠賴\
賺賽贊贈贏趙趨躍踐踴躪車軋軌轉輪軟轟軸輕載較輔輛輩輝輸轄輾辭辯邊\
達遷過邁運還這進遠違連遲跡適選遜遞邏遺鄧郵鄒鄭釀釋鑑針釘釣釵鈣鈍\
鈔鐘鈉鋼鑰欽鈞鉤錢鉗鑽鐵鈴鉛銅鋁銘銀鑄鋪鏈銷鎖鋤鍋鏽鋒銳錯錨錘錦\
鍵鍛鎮鏡鐮長門閃閉問闖閏閑間悶閘鬧聞閥閣閱闡闊隊陽陰陣階際陸陳隱\
隨隸難雛霧靜韋韻頁頂頃項順須頑顧頓頌預顱領頗頸頻穎顆題顏額風飄飛\
飢飯飲飾飽飼饒餃餅館饋饅馬馭馳驅駁驢駛駒駐駝駕罵驕駱駭騎騙騷騾驟\
魚魯鮮鯉鯨鱗鱷鳥雞鳴鴉鴨鴿鴻鵑鵝鵲鵬鶴鷹麥黃黨齊齒齡龍龜齋龔鑿鹵";
